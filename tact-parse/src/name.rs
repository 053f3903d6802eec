use crate::priv_prelude::*;

/// Naming policy applied to every declared name: structs, contracts, traits,
/// primitives, functions, native functions and their bound names, arguments
/// and `let` bindings.
pub trait NameValidator {
    /// Returns `Err(reason)` if `name` may not be declared.
    fn check(&self, name: &str) -> Result<(), String>;
}

/// Rejects names that start with one of a set of prefixes reserved for
/// compiler-generated code.
#[derive(Clone, Debug)]
pub struct ReservedPrefixes {
    prefixes: Vec<String>,
}

pub const GENERATED_NAME_PREFIX: &str = "__gen";

impl ReservedPrefixes {
    pub fn new<I, S>(prefixes: I) -> ReservedPrefixes
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ReservedPrefixes {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for ReservedPrefixes {
    fn default() -> Self {
        ReservedPrefixes::new([GENERATED_NAME_PREFIX])
    }
}

impl NameValidator for ReservedPrefixes {
    fn check(&self, name: &str) -> Result<(), String> {
        match self.prefixes.iter().find(|prefix| name.starts_with(prefix.as_str())) {
            Some(prefix) => Err(format!("names cannot start with \"{prefix}\"")),
            None => Ok(()),
        }
    }
}

/// Runs the context's validator over a name at its point of declaration. The
/// error points at the name itself, not at the enclosing declaration.
pub(crate) fn check_variable_name(ctx: &ParseCtx<'_>, name: &Ident) -> Result<(), ErrorEmitted> {
    ctx.validator().check(name.as_str()).map_err(|reason| {
        ctx.handler().emit_err(CompileError::InvalidIdentifier {
            name: name.clone(),
            reason,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_rejects_generated_prefix() {
        let policy = ReservedPrefixes::default();
        assert!(policy.check("counter").is_ok());
        assert!(policy.check("_private").is_ok());
        assert_eq!(
            policy.check("__gen_tmp"),
            Err("names cannot start with \"__gen\"".to_string())
        );
    }

    #[test]
    fn custom_prefixes() {
        let policy = ReservedPrefixes::new(["__tact", "__gen"]);
        assert!(policy.check("__tact_my_balance").is_err());
        assert!(policy.check("__gen").is_err());
        assert!(policy.check("tact").is_ok());
    }
}
