//! `quote` and `pickup` command handlers.

use anyhow::Context;
use clap::Args;
use entrega_core::{Address, AppConfig, DeliveryConfig, DeliveryOption, DeliveryQuote};
use entrega_geocoder::{CepClient, NominatimClient};
use entrega_quote::quote_for_option;

use crate::settings::load_delivery_settings;

/// Customer address flags. With `--cep`, the looked-up address is used as a
/// base and any flag given explicitly overrides it.
#[derive(Debug, Default, Args)]
pub struct AddressArgs {
    /// CEP used to pre-fill street, neighborhood, city and state
    #[arg(long)]
    pub cep: Option<String>,
    #[arg(long)]
    pub street: Option<String>,
    /// House or building number
    #[arg(long)]
    pub number: Option<String>,
    /// Apartment, block, etc.
    #[arg(long)]
    pub complement: Option<String>,
    #[arg(long)]
    pub neighborhood: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    /// Two-letter state code (e.g. SP)
    #[arg(long)]
    pub state: Option<String>,
}

/// Merges explicit flags over an optional pre-filled address.
pub(crate) fn build_address(args: &AddressArgs, prefill: Option<Address>) -> Address {
    let mut address = prefill.unwrap_or_default();

    if let Some(street) = &args.street {
        address.street.clone_from(street);
    }
    if let Some(number) = &args.number {
        address.number.clone_from(number);
    }
    if let Some(complement) = &args.complement {
        address.complement = Some(complement.clone());
    }
    if let Some(neighborhood) = &args.neighborhood {
        address.neighborhood = Some(neighborhood.clone());
    }
    if let Some(city) = &args.city {
        address.city.clone_from(city);
    }
    if let Some(state) = &args.state {
        address.state = state.trim().to_uppercase();
    }

    address
}

/// Quote a delivery to the address described by `args`.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the CEP lookup fails, or
/// the quote cannot be produced (incomplete address, geocoding failure).
pub(crate) async fn run_quote(
    config: &AppConfig,
    args: &AddressArgs,
    json: bool,
) -> anyhow::Result<()> {
    let delivery = load_delivery_settings(&config.delivery_config_path)?;

    let prefill = match args.cep.as_deref() {
        Some(cep) => {
            let client = CepClient::with_base_url(
                &config.cep_base_url,
                config.http_timeout_secs,
                &config.user_agent,
            )
            .context("failed to build CEP client")?;
            let found = client
                .lookup(cep)
                .await
                .with_context(|| format!("CEP lookup failed for {cep}"))?;
            Some(found.into_address_template())
        }
        None => None,
    };
    let address = build_address(args, prefill);

    let geocoder = NominatimClient::with_base_url(
        &config.geocoder_base_url,
        config.http_timeout_secs,
        &config.user_agent,
    )
    .context("failed to build geocoding client")?;

    let quote = match quote_for_option(&geocoder, DeliveryOption::Delivery, &address, &delivery)
        .await
    {
        Ok(quote) => quote,
        Err(e) if e.is_retryable() => {
            return Err(anyhow::Error::new(e)
                .context("delivery quote failed; the geocoding service may be down, try again"));
        }
        Err(e) => return Err(anyhow::Error::new(e).context("delivery quote failed")),
    };

    print_quote(&quote, &delivery, &address, json)
}

/// Print the free pickup quote for the configured store.
///
/// # Errors
///
/// Returns an error if the delivery config exists but is invalid.
pub(crate) fn run_pickup(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let delivery = load_delivery_settings(&config.delivery_config_path)?;
    let quote = entrega_quote::pickup_quote(&delivery.store);
    let store_address = delivery.store.address.clone();
    print_quote(&quote, &delivery, &store_address, json)
}

fn print_quote(
    quote: &DeliveryQuote,
    delivery: &DeliveryConfig,
    address: &Address,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(quote)?);
        return Ok(());
    }

    for line in render_quote(quote, delivery, address) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn render_quote(
    quote: &DeliveryQuote,
    delivery: &DeliveryConfig,
    address: &Address,
) -> Vec<String> {
    match quote.option {
        DeliveryOption::Pickup => vec![
            format!(
                "Pickup at {}",
                delivery.store.address.full_text(&delivery.country)
            ),
            format!("Fee: {}", quote.fee_display()),
        ],
        DeliveryOption::Delivery => {
            let destination = quote
                .destination
                .label()
                .map_or_else(|| address.full_text(&delivery.country), str::to_owned);
            vec![
                format!("Delivery to {destination}"),
                format!("Distance: {:.2} km", quote.distance_km),
                format!("Fee: {}", quote.fee_display()),
            ]
        }
    }
}
