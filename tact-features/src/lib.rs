use std::collections::BTreeSet;

use clap::{Args, ValueEnum};

macro_rules! features {
    ($($name:ident = $enabled:literal, $description:literal),* $(,)?) => {
        paste::paste! {
            /// A compiler feature known by name.
            #[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Hash)]
            #[value(rename_all = "snake")]
            pub enum Feature {
                $(
                    #[doc = $description]
                    [<$name:camel>],
                )*
            }

            impl Feature {
                pub const ALL: &'static [Feature] = &[$(Feature::[<$name:camel>],)*];

                pub fn name(&self) -> &'static str {
                    match self {
                        $(
                            Feature::[<$name:camel>] => stringify!([<$name:snake>]),
                        )*
                    }
                }

                pub fn description(&self) -> &'static str {
                    match self {
                        $(
                            Feature::[<$name:camel>] => $description,
                        )*
                    }
                }
            }

            impl std::str::FromStr for Feature {
                type Err = Error;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    match s {
                        $(
                            stringify!([<$name:snake>]) => Ok(Self::[<$name:camel>]),
                        )*
                        _ => Err(Error::UnknownFeature(s.to_string())),
                    }
                }
            }

            /// The feature flags of one compilation. Known flags are plain
            /// fields; any other enabled key is kept by name.
            #[derive(Clone, Debug, PartialEq, Eq, Hash)]
            pub struct Features {
                $(
                    [<$name:snake>]: bool,
                )*
                other: BTreeSet<String>,
            }

            impl std::default::Default for Features {
                fn default() -> Self {
                    Features {
                        $(
                            [<$name:snake>]: $enabled,
                        )*
                        other: BTreeSet::new(),
                    }
                }
            }

            impl Features {
                pub fn set_enabled(&mut self, feature: Feature, enabled: bool) {
                    match feature {
                        $(
                            Feature::[<$name:camel>] => self.[<$name:snake>] = enabled,
                        )*
                    }
                }

                pub fn enabled(&self, feature: Feature) -> bool {
                    match feature {
                        $(
                            Feature::[<$name:camel>] => self.[<$name:snake>],
                        )*
                    }
                }

                $(
                    pub fn [<enabled_ $name:snake>](&self) -> bool {
                        self.[<$name:snake>]
                    }

                    pub fn [<with_ $name:snake>](mut self, enabled: bool) -> Self {
                        self.[<$name:snake>] = enabled;
                        self
                    }
                )*
            }
        }
    };
}

features! {
    inline = false,
    "Inline functions into their call sites where possible.",
    debug = false,
    "Keep debug output such as `dump` calls in the generated code.",
}

impl Features {
    /// Enables the flag named `key`. Keys that are not known features are
    /// remembered as well, so `is_enabled` reports them.
    pub fn enable(&mut self, key: &str) {
        match key.parse::<Feature>() {
            Ok(feature) => self.set_enabled(feature, true),
            Err(_) => {
                self.other.insert(key.to_string());
            }
        }
    }

    pub fn is_enabled(&self, key: &str) -> bool {
        match key.parse::<Feature>() {
            Ok(feature) => self.enabled(feature),
            Err(_) => self.other.contains(key),
        }
    }

    /// Names of all enabled flags, known ones first.
    pub fn enabled_names(&self) -> Vec<String> {
        Feature::ALL
            .iter()
            .filter(|feature| self.enabled(**feature))
            .map(|feature| feature.name().to_string())
            .chain(self.other.iter().cloned())
            .collect()
    }
}

#[derive(Clone, Debug, Default, Args)]
pub struct CliFeatures {
    /// Enable a compiler feature by name, e.g. `inline` or `debug`. May be given
    /// more than once.
    #[clap(long = "enable-feature", value_name = "NAME", global = true)]
    pub enable_feature: Vec<String>,
}

impl From<&CliFeatures> for Features {
    fn from(cli: &CliFeatures) -> Self {
        let mut features = Features::default();
        for key in &cli.enable_feature {
            features.enable(key);
        }
        features
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown feature: \"{0}\".")]
    UnknownFeature(String),
}
