use camino::Utf8Path;
use idguard_domain::model::{ResourceDecl, TemplateModel};
use idguard_types::{RepoPath, TemplateFormat};

const RESOURCES_KEY: &str = "Resources";
const TYPE_KEY: &str = "Type";

/// Why a discovered file could not be turned into a [`TemplateModel`].
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("{0}")]
    Read(#[from] std::io::Error),

    /// Not valid JSON/YAML. Carries the parser's message.
    #[error("{message}")]
    Syntax {
        format: TemplateFormat,
        message: String,
    },

    /// Valid syntax, but not shaped like a template.
    #[error("malformed template: {message}")]
    Shape {
        format: TemplateFormat,
        message: String,
    },
}

impl TemplateError {
    /// Parse failures (syntax or shape) as opposed to IO failures.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, TemplateError::Read(_))
    }
}

/// Read `path` under `root` and parse it.
pub fn read_template(root: &Utf8Path, path: &RepoPath) -> Result<TemplateModel, TemplateError> {
    let text = std::fs::read_to_string(path.resolve(root))?;
    parse_template(path, &text)
}

/// Parse template text. A name ending in `.json` is decoded as JSON, anything
/// else as YAML. YAML merge keys (`<<`) are resolved before the resources are
/// read.
///
/// An absent or `null` `Resources` section (and an empty document) yields a
/// template with no resources.
pub fn parse_template(path: &RepoPath, text: &str) -> Result<TemplateModel, TemplateError> {
    let format = TemplateFormat::from_file_name(path.file_name());
    let resources = match format {
        TemplateFormat::Json => json_resources(text)?,
        TemplateFormat::Yaml => yaml_resources(text)?,
    };
    Ok(TemplateModel {
        path: path.clone(),
        format,
        resources,
    })
}

fn json_resources(text: &str) -> Result<Vec<ResourceDecl>, TemplateError> {
    use serde_json::Value;

    let format = TemplateFormat::Json;
    let doc: Value = serde_json::from_str(text).map_err(|e| TemplateError::Syntax {
        format,
        message: e.to_string(),
    })?;

    let root = match doc {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        _ => return Err(shape(format, "top-level value is not a mapping")),
    };

    match root.get(RESOURCES_KEY) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Object(resources)) => Ok(resources
            .iter()
            .map(|(id, decl)| {
                ResourceDecl::new(id.as_str(), decl.get(TYPE_KEY).and_then(Value::as_str))
            })
            .collect()),
        Some(_) => Err(shape(format, "`Resources` is not a mapping")),
    }
}

fn yaml_resources(text: &str) -> Result<Vec<ResourceDecl>, TemplateError> {
    use serde_yaml::Value;

    let format = TemplateFormat::Yaml;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut doc: Value = serde_yaml::from_str(text).map_err(|e| TemplateError::Syntax {
        format,
        message: e.to_string(),
    })?;
    doc.apply_merge().map_err(|e| TemplateError::Syntax {
        format,
        message: e.to_string(),
    })?;

    let root = match doc {
        Value::Mapping(map) => map,
        Value::Null => return Ok(Vec::new()),
        _ => return Err(shape(format, "top-level value is not a mapping")),
    };

    match root.get(RESOURCES_KEY) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Mapping(resources)) => resources
            .iter()
            .map(|(key, decl)| {
                let id = yaml_key(key).ok_or_else(|| {
                    shape(format, "resource keys must be strings, numbers, or booleans")
                })?;
                Ok(ResourceDecl::new(
                    id,
                    decl.get(TYPE_KEY).and_then(Value::as_str),
                ))
            })
            .collect(),
        Some(_) => Err(shape(format, "`Resources` is not a mapping")),
    }
}

/// Scalar mapping keys as text; YAML allows `1:` or `true:` as keys.
fn yaml_key(key: &serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn shape(format: TemplateFormat, message: &str) -> TemplateError {
    TemplateError::Shape {
        format,
        message: message.to_string(),
    }
}
