use minibank_app::AppConfig;
use minibank_bank::Stdout;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    minibank_observability::init(config.log_format);
    tracing::debug!(?config, "configuration loaded");

    minibank_app::demo::run(Stdout, config.dump_format)?;
    Ok(())
}
