use anyhow::{bail, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};
use tact_ast::{ProgramItem, ReceiverSelector};
use tact_error::{error::CompileError, handler::Handler};
use tact_tracing::println_diagnostic;
use tact_types::{SourceEngine, SourceId, Spanned};

/// A source file read from disk and registered with the [SourceEngine].
pub(crate) struct SourceFile {
    pub path: PathBuf,
    pub src: Arc<str>,
    pub source_id: SourceId,
}

pub(crate) fn load(engine: &SourceEngine, path: &Path) -> Result<SourceFile> {
    let src =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let path = path.to_path_buf();
    let source_id = engine.get_source_id(&path);
    tracing::debug!(path = %path.display(), %source_id, "loaded source");
    Ok(SourceFile {
        path,
        src: Arc::from(src),
        source_id,
    })
}

/// Runs `f` with a fresh [Handler]. Emitted errors are printed and turned into
/// a failure of the command.
pub(crate) fn with_handler<T>(
    engine: &SourceEngine,
    file: &SourceFile,
    f: impl FnOnce(&Handler) -> std::result::Result<T, tact_error::handler::ErrorEmitted>,
) -> Result<T> {
    let handler = Handler::default();
    let res = f(&handler);
    let errors = handler.consume();
    for err in &errors {
        println_diagnostic(&err.to_friendly_error_string(), location(engine, err).as_deref());
    }
    match res {
        Ok(value) if errors.is_empty() => Ok(value),
        _ => bail!(
            "Failed to parse {} ({} error{})",
            file.path.display(),
            errors.len(),
            if errors.len() == 1 { "" } else { "s" }
        ),
    }
}

/// `path:line:col` of the start of the error, or `None` for errors without a
/// known file.
fn location(engine: &SourceEngine, err: &CompileError) -> Option<String> {
    let path = err.source_id().and_then(|id| engine.get_path(&id))?;
    let (start, _) = err.span().line_col();
    Some(format!("{}:{}:{}", path.display(), start.line, start.col))
}

/// A one-line summary of a top-level item.
pub(crate) fn describe_item(item: &ProgramItem) -> String {
    match item {
        ProgramItem::Import(import) => format!("import {}", import.path.span().as_str()),
        ProgramItem::Primitive(primitive) => format!("primitive {}", primitive.name),
        ProgramItem::Struct(item) => {
            let (name, fields) = (&item.name, item.fields.len());
            match (item.message, item.prefix) {
                (true, Some(prefix)) => format!("message(0x{prefix:08x}) {name} ({fields} fields)"),
                (true, None) => format!("message {name} ({fields} fields)"),
                (false, _) => format!("struct {name} ({fields} fields)"),
            }
        }
        ProgramItem::Contract(item) => format!(
            "contract {}{} ({} declarations)",
            item.name,
            with_traits(&item.traits),
            item.declarations.len()
        ),
        ProgramItem::Trait(item) => format!(
            "trait {}{} ({} declarations)",
            item.name,
            with_traits(&item.traits),
            item.declarations.len()
        ),
        ProgramItem::Function(f) => format!("fun {}", f.name),
        ProgramItem::NativeFunction(f) => format!("native {} = {}", f.name, f.native_name),
    }
}

fn with_traits(traits: &[tact_types::Ident]) -> String {
    if traits.is_empty() {
        return String::new();
    }
    let names: Vec<_> = traits.iter().map(|t| t.as_str()).collect();
    format!(" with {}", names.join(", "))
}

/// A one-line summary of a receiver selector.
pub(crate) fn describe_selector(selector: &ReceiverSelector) -> String {
    match selector {
        ReceiverSelector::Simple { arg } => {
            format!("receive({}: {})", arg.name, arg.ty.span().as_str())
        }
        ReceiverSelector::Fallback => "receive()".to_string(),
        ReceiverSelector::Comment { comment } => format!("receive(\"{}\")", comment.value),
        ReceiverSelector::Bounced { arg } => {
            format!("bounced({}: {})", arg.name, arg.ty.span().as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tact_ast::ContractDeclaration;

    fn program(src: &str) -> tact_ast::Program {
        tact_parse::parse(&Handler::default(), Arc::from(src), None).unwrap()
    }

    #[test]
    fn item_summaries() {
        let program = program(
            "import \"./a\";\n\
             message(0x10) M { x: Int; }\n\
             struct S { }\n\
             contract C with T { receive(m: M) { } }\n\
             @name(f) native g();",
        );
        let lines: Vec<_> = program.items.iter().map(describe_item).collect();
        assert_eq!(
            lines,
            [
                "import \"./a\"",
                "message(0x00000010) M (1 fields)",
                "struct S (0 fields)",
                "contract C with T (1 declarations)",
                "native g = f",
            ]
        );
        let ProgramItem::Contract(contract) = &program.items[3] else {
            unreachable!()
        };
        let ContractDeclaration::Receiver(receiver) = &contract.declarations[0] else {
            unreachable!()
        };
        assert_eq!(describe_selector(&receiver.selector), "receive(m: M)");
    }

    #[test]
    fn errors_are_located_in_their_file() {
        let engine = SourceEngine::default();
        let path = PathBuf::from("contracts/main.tact");
        let source_id = engine.get_source_id(&path);
        let handler = Handler::default();
        let src = Arc::from("fun f() { }\n  import \"a\";");
        let res = tact_parse::parse_imports(&handler, src, Some(source_id));
        assert!(res.is_err());
        let errors = handler.consume();
        assert_eq!(location(&engine, &errors[0]).as_deref(), Some("contracts/main.tact:2:3"));

        let orphan = CompileError::ImportNotAtTop {
            span: tact_types::Span::dummy(),
        };
        assert_eq!(location(&engine, &orphan), None);
    }

    #[test]
    fn failed_parse_is_an_error() {
        let engine = SourceEngine::default();
        let file = SourceFile {
            path: PathBuf::from("bad.tact"),
            src: Arc::from("fun"),
            source_id: engine.get_source_id(&PathBuf::from("bad.tact")),
        };
        let err = with_handler(&engine, &file, |handler| {
            tact_parse::parse(handler, file.src.clone(), Some(file.source_id))
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse bad.tact (1 error)");
    }
}
