use anyhow::Context;
use entrega_core::AppConfig;
use entrega_geocoder::CepClient;

/// Look up a CEP and print the address fields it resolves to.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the lookup fails.
pub(crate) async fn run_cep(config: &AppConfig, cep: &str, json: bool) -> anyhow::Result<()> {
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

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    println!("CEP:          {}", found.cep);
    println!("Street:       {}", found.street);
    println!("Neighborhood: {}", found.neighborhood);
    println!("City:         {} - {}", found.city, found.state);
    if !found.complement.is_empty() {
        println!("Note:         {}", found.complement);
    }
    Ok(())
}
