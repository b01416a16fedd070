use miette::Diagnostic;
use thiserror::Error;

/// Main error type for partcfg operations
#[derive(Error, Diagnostic, Debug)]
pub enum PartError {
    #[error("IO error: {0}")]
    #[diagnostic(code(partcfg::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(partcfg::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    /// A line matched neither the `key = value` grammar nor a comment or
    /// terminator. Only reported when `ParseOptions` asks for it.
    #[error("line {line} is not a `key = value` assignment: {found:?}")]
    #[diagnostic(
        code(partcfg::parse::line),
        help("Assignments look like `mass = 0.8`; comments start with `//`")
    )]
    MalformedLine { line: u32, found: String },

    /// The `module` value is not one of the recognized module kinds.
    #[error("module '{value}' is not known to this program (line {line})")]
    #[diagnostic(
        code(partcfg::parse::module),
        help("Module names are case-sensitive, e.g. `FuelTank` or `AdvSASModule`")
    )]
    UnknownModule { value: String, line: u32 },

    /// The definition ended without ever assigning `module`.
    #[error("part definition has no module declaration")]
    #[diagnostic(
        code(partcfg::parse::module),
        help("Every part must carry a `module = <kind>` line")
    )]
    MissingModule,

    /// A recognized field's value failed its typed conversion.
    #[error("{field} value '{value}' could not be parsed (line {line})")]
    #[diagnostic(code(partcfg::parse::field))]
    Field {
        field: &'static str,
        value: String,
        line: u32,
        #[source]
        cause: CoercionCause,
    },

    /// `attachRules` did not decode into exactly five flags.
    #[error("attachRules value '{value}' does not decode into five attachment flags (line {line})")]
    #[diagnostic(
        code(partcfg::parse::rules),
        help("Expected five comma-separated flags: stack, surface, allowStack, allowSurface, allowCollision")
    )]
    AttachRules { value: String, line: u32 },

    /// A value sniffed as a node definition did not decode.
    #[error("node '{key}' value '{value}' could not be parsed into six components (line {line})")]
    #[diagnostic(
        code(partcfg::parse::node),
        help("Node values carry a marker then six numbers: `node, x, y, z, ux, uy, uz`")
    )]
    Node {
        key: String,
        value: String,
        line: u32,
    },

    /// A module-specific field failed to parse. No line number is
    /// available once the scan has finished and only staged key/value
    /// pairs remain.
    #[error("module field '{key}' value '{value}' could not be parsed as a number")]
    #[diagnostic(code(partcfg::parse::field))]
    ModuleField {
        key: String,
        value: String,
        #[source]
        cause: std::num::ParseFloatError,
    },

    /// The mesh collaborator could not produce a handle.
    #[error("failed to load mesh '{reference}': {message}")]
    #[diagnostic(code(partcfg::mesh))]
    MeshLoad { reference: String, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(partcfg::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(partcfg::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

/// Underlying cause of a field coercion failure.
#[derive(Error, Debug)]
pub enum CoercionCause {
    #[error(transparent)]
    Float(#[from] std::num::ParseFloatError),

    #[error(transparent)]
    Int(#[from] std::num::ParseIntError),

    #[error("expected {expected} components, found {found}")]
    Components { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, PartError>;
