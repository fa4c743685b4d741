use std::fs;
use tracing::info;

mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_rates_mock_server(base: &str, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        let url_path = format!("/v4/latest/{base}");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub async fn create_failing_mock_server(base: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        let url_path = format!("/v4/latest/{base}");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        mock_server
    }
}

const SNAPSHOT_YAML: &str = r#"
assets:
  real_estate:
    - name: "Lotus Apartment"
      current_value: 6000000
      currency: "EGP"
      monthly_rent: 11000
      next_rent_due_date: "2026-09-10"
  under_development:
    - name: "Dejoya Residence"
      amount_paid: 1181250
      currency: "EGP"
  cash:
    - location: "Gulf Bank"
      amount: 11622
      currency: "KWD"
  gold:
    - name: "Gold bars"
      grams: 300
  salary:
    amount: 4000
    currency: "KWD"
liabilities:
  loans:
    - name: "Gulf Bank Loan 1"
      principal: 20000
      remaining: 17404
      monthly_payment: 395.86
      currency: "KWD"
  installments:
    - name: "Tycoon Hotel Unit"
      total: 10578141
      paid: 4830267
      amount: 1596300
      frequency: "Semi-Annual"
      next_due_date: "2026-09-01"
      currency: "EGP"
monthly_expenses:
  household:
    - name: "Household (Egypt)"
      amount: 80000
      currency: "EGP"
"#;

fn write_config(
    dir: &tempfile::TempDir,
    snapshot_path: &std::path::Path,
    provider_url: Option<&str>,
) -> std::path::PathBuf {
    let provider_block = provider_url
        .map(|url| format!("provider:\n  base_url: \"{url}\"\n"))
        .unwrap_or_default();
    let config_content = format!(
        r#"
currency: "USD"
rates:
  USD: 1.0
  EGP: 50.0
  KWD: 0.31
  Gold: 2350.0
  Silver: 28.5
{provider_block}snapshot_path: "{}"
"#,
        snapshot_path.display()
    );

    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, config_content).expect("Failed to write config file");
    config_path
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_live_rates_mock() {
    let mock_response = r#"{"base":"USD","rates":{"EGP":47.5,"KWD":0.31,"TRY":32.8,"EUR":0.92}}"#;
    let mock_server = test_utils::create_rates_mock_server("USD", mock_response).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let snapshot_path = dir.path().join("snapshot.yaml");
    fs::write(&snapshot_path, SNAPSHOT_YAML).expect("Failed to write snapshot file");
    let config_path = write_config(&dir, &snapshot_path, Some(&mock_server.uri()));

    info!("Running summary against mocked rate provider");
    let result = nwt::run_command(
        nwt::AppCommand::Summary,
        Some(config_path.to_str().unwrap()),
        None,
    )
    .await;
    assert!(
        result.is_ok(),
        "Summary command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_offline_flow_uses_static_rates() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let snapshot_path = dir.path().join("snapshot.yaml");
    fs::write(&snapshot_path, SNAPSHOT_YAML).expect("Failed to write snapshot file");
    let config_path = write_config(&dir, &snapshot_path, None);

    let result = nwt::run_command(
        nwt::AppCommand::Breakdown,
        Some(config_path.to_str().unwrap()),
        None,
    )
    .await;
    assert!(
        result.is_ok(),
        "Breakdown command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_provider_failure_degrades_to_static_rates() {
    let mock_server = test_utils::create_failing_mock_server("USD").await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let snapshot_path = dir.path().join("snapshot.yaml");
    fs::write(&snapshot_path, SNAPSHOT_YAML).expect("Failed to write snapshot file");
    let config_path = write_config(&dir, &snapshot_path, Some(&mock_server.uri()));

    let result = nwt::run_command(
        nwt::AppCommand::Summary,
        Some(config_path.to_str().unwrap()),
        None,
    )
    .await;
    assert!(
        result.is_ok(),
        "A failed rate fetch must not fail the command: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_missing_snapshot_renders_zeroed_dashboard() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let snapshot_path = dir.path().join("does-not-exist.yaml");
    let config_path = write_config(&dir, &snapshot_path, None);

    let result = nwt::run_command(
        nwt::AppCommand::Summary,
        Some(config_path.to_str().unwrap()),
        None,
    )
    .await;
    assert!(
        result.is_ok(),
        "A missing snapshot must not fail the command: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_upcoming_with_currency_override() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let snapshot_path = dir.path().join("snapshot.yaml");
    fs::write(&snapshot_path, SNAPSHOT_YAML).expect("Failed to write snapshot file");
    let config_path = write_config(&dir, &snapshot_path, None);

    let result = nwt::run_command(
        nwt::AppCommand::Upcoming,
        Some(config_path.to_str().unwrap()),
        Some("EGP"),
    )
    .await;
    assert!(
        result.is_ok(),
        "Upcoming command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_missing_config_is_an_error() {
    let result = nwt::run_command(
        nwt::AppCommand::Summary,
        Some("/nonexistent/nwt-config.yaml"),
        None,
    )
    .await;
    assert!(result.is_err());
}
