use clap::ValueEnum;

/// Serialization of the printed descriptor
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON, keys in merge order
    #[default]
    #[value(name = "json")]
    Json,

    /// TOML, for tools that prefer it over JSON
    #[value(name = "toml")]
    Toml,
}
