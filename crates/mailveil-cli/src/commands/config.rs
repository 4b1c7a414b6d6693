use anyhow::Result;
use mailveil_config::Config;

pub fn handle(path: bool) -> Result<()> {
    if path {
        println!("{}", Config::config_path().display());
    } else {
        print!("{}", toml::to_string_pretty(&Config::load()?)?);
    }
    Ok(())
}
