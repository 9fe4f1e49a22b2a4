use scitra_dns_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Path of the configuration file in effect, if any.
pub fn config_source(path: Option<&str>) -> Option<String> {
    path.map(str::to_string).or_else(Config::get_config_path)
}
