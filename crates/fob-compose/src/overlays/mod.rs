//! Overlay producers.
//!
//! Each producer is a pure function from options to a [`Fragment`]. Calling
//! one twice with the same options yields equal fragments, and none of them
//! look at process state. Bad options fail at the call with
//! [`ComposeError::InvalidOverlayOptions`](crate::ComposeError::InvalidOverlayOptions).

mod lint;
mod style;
mod util;

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::error::Result;
use crate::fragment::Fragment;

pub use lint::{LintOptions, lint};
pub use style::{PrefixWrap, Style, StyleOptions};
pub use util::{
    BundleSplit, DevServerOptions, clean, dev_server, extract_js_bundle, optimize,
    set_environment_variable, source_maps,
};

pub(crate) use util::env_map;

/// Anything that turns its options into a fragment.
pub trait FragmentProducer {
    /// Stable identifier used in logs and errors
    fn name(&self) -> &'static str;

    fn produce(&self) -> Result<Fragment>;
}

/// A producer paired with the options it is invoked with.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Clean(PathBuf),
    SetEnvironmentVariable(IndexMap<String, String>),
    ExtractJsBundle(BundleSplit),
    Optimize,
    DevServer(DevServerOptions),
    SourceMaps(String),
    Style(Style, StyleOptions),
    Lint(LintOptions),
}

impl FragmentProducer for Overlay {
    fn name(&self) -> &'static str {
        match self {
            Overlay::Clean(_) => "clean",
            Overlay::SetEnvironmentVariable(_) => "set_environment_variable",
            Overlay::ExtractJsBundle(_) => "extract_js_bundle",
            Overlay::Optimize => "optimize",
            Overlay::DevServer(_) => "dev_server",
            Overlay::SourceMaps(_) => "source_maps",
            Overlay::Style(..) => "style",
            Overlay::Lint(_) => "lint",
        }
    }

    fn produce(&self) -> Result<Fragment> {
        match self {
            Overlay::Clean(dir) => clean(dir),
            Overlay::SetEnvironmentVariable(vars) => set_environment_variable(vars),
            Overlay::ExtractJsBundle(split) => extract_js_bundle(split),
            Overlay::Optimize => Ok(optimize()),
            Overlay::DevServer(options) => dev_server(options),
            Overlay::SourceMaps(devtool) => source_maps(devtool),
            Overlay::Style(style, options) => style.extract_scss_to_css(options),
            Overlay::Lint(options) => lint(options),
        }
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overlay::Clean(dir) => write!(f, "clean({})", dir.display()),
            Overlay::SetEnvironmentVariable(vars) => {
                let pairs: Vec<_> = vars.iter().map(|(k, v)| format!("{k}={v}")).collect();
                write!(f, "set_environment_variable({})", pairs.join(", "))
            }
            Overlay::ExtractJsBundle(split) => write!(
                f,
                "extract_js_bundle({}: {})",
                split.name,
                split.entries.join(", ")
            ),
            Overlay::Optimize => f.write_str("optimize"),
            Overlay::DevServer(options) => {
                write!(f, "dev_server({}:{})", options.host, options.port)
            }
            Overlay::SourceMaps(devtool) => write!(f, "source_maps({devtool})"),
            Overlay::Style(_, options) => write!(f, "style({})", options.env),
            Overlay::Lint(_) => f.write_str("lint"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Environment;

    #[test]
    fn producers_are_referentially_transparent() {
        let overlays = [
            Overlay::Clean(PathBuf::from("dist")),
            Overlay::SetEnvironmentVariable(env_map([("NODE_ENV", "production")])),
            Overlay::ExtractJsBundle(BundleSplit::new("vendor", ["jquery"])),
            Overlay::Optimize,
            Overlay::DevServer(DevServerOptions {
                host: "localhost".into(),
                port: 8100,
            }),
            Overlay::SourceMaps("inline-source-map".into()),
            Overlay::Style(
                Style::default(),
                StyleOptions {
                    env: Environment::Production,
                    filter: String::new(),
                    path: Vec::new(),
                    extra_resources: Vec::new(),
                },
            ),
            Overlay::Lint(LintOptions::default()),
        ];

        for overlay in &overlays {
            assert_eq!(
                overlay.produce().unwrap(),
                overlay.produce().unwrap(),
                "{} produced different fragments",
                overlay.name()
            );
        }
    }

    #[test]
    fn display_summarizes_options() {
        assert_eq!(Overlay::Clean(PathBuf::from("dist")).to_string(), "clean(dist)");
        assert_eq!(
            Overlay::ExtractJsBundle(BundleSplit::new("vendor", ["jquery"])).to_string(),
            "extract_js_bundle(vendor: jquery)"
        );
        assert_eq!(
            Overlay::DevServer(DevServerOptions {
                host: "localhost".into(),
                port: 8100
            })
            .to_string(),
            "dev_server(localhost:8100)"
        );
    }
}
