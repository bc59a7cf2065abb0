use crate::domain::model::{DocumentReport, PruneResult, RemovalDirective};
use crate::utils::error::{PruneError, Result};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

pub const DOCUMENT_SEPARATOR: &str = "---\n";

/// 依序解析多文件 YAML，任一文件失敗即整體失敗
pub fn parse_documents(manifest: &str) -> Result<Vec<Value>> {
    let mut documents = Vec::new();
    for (index, document) in serde_yaml::Deserializer::from_str(manifest).enumerate() {
        let value = Value::deserialize(document).map_err(|e| PruneError::ParseError {
            document: index,
            message: e.to_string(),
        })?;
        documents.push(value);
    }

    // 空白或只有註解的輸入會被解析成單一 null 文件，視為沒有文件
    if documents.len() == 1 && documents[0].is_null() && !has_content(manifest) {
        documents.clear();
    }
    Ok(documents)
}

/// True when the text holds anything besides blank lines and comments,
/// including a bare `---` marker or an explicit `~`.
fn has_content(manifest: &str) -> bool {
    manifest.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    })
}

/// Pretty JSON form of a removal plan, as printed by `--dry-run`.
pub fn render_plan(reports: &[DocumentReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// Serializes documents back into one manifest, joined by `---`.
///
/// Empty documents are kept as empty bodies so the document count survives
/// a round trip. A leading empty document needs an explicit marker, otherwise
/// the parser would fold it into the next one.
pub fn render_documents(documents: &[Value]) -> Result<String> {
    let mut rendered = String::new();
    for (index, document) in documents.iter().enumerate() {
        if index > 0 || document.is_null() {
            rendered.push_str(DOCUMENT_SEPARATOR);
        }
        if !document.is_null() {
            rendered.push_str(&serde_yaml::to_string(document)?);
        }
    }
    Ok(rendered)
}

/// Strict lookup of the value at `path`.
///
/// Unlike removal, every miss is an error here: an empty path, an
/// intermediate value that is not a mapping, or a missing key.
pub fn get_items<'a, S: AsRef<str>>(document: &'a Value, path: &[S]) -> Result<&'a Value> {
    if path.is_empty() {
        return Err(PruneError::EmptyPath);
    }

    let mut current = document;
    for (depth, segment) in path.iter().enumerate() {
        let mapping = current.as_mapping().ok_or_else(|| PruneError::NotAMapping {
            path: join_segments(&path[..depth]),
        })?;
        current = mapping
            .get(segment.as_ref())
            .ok_or_else(|| PruneError::KeyNotFound {
                path: join_segments(&path[..=depth]),
            })?;
    }

    Ok(current)
}

/// Removes the directive keys from every document and reports what changed.
///
/// Paths are resolved against the document as parsed, so one directive
/// removing a parent never turns another directive into a skip.
pub fn prune_manifest(manifest: &str, directives: &[RemovalDirective]) -> Result<PruneResult> {
    let mut documents = parse_documents(manifest)?;
    let reports = plan_documents(&documents, directives);

    for (document, report) in documents.iter_mut().zip(&reports) {
        for directive in directives {
            if let Some(mapping) = resolve_mapping_mut(document, &directive.path) {
                for key in &directive.keys {
                    mapping.shift_remove(key.as_str());
                }
            }
        }

        if !report.removed.is_empty() {
            tracing::debug!(
                "Document {} ({}): removed {:?}",
                report.index,
                report.kind.as_deref().unwrap_or("unknown kind"),
                report.removed
            );
        }
    }

    let manifest = render_documents(&documents)?;
    Ok(PruneResult {
        manifest,
        documents: reports,
    })
}

pub fn remove_fields(manifest: &str, directives: &[RemovalDirective]) -> Result<String> {
    prune_manifest(manifest, directives).map(|result| result.manifest)
}

/// Reports which keys `prune_manifest` would remove, without modifying anything.
pub fn plan_removal(manifest: &str, directives: &[RemovalDirective]) -> Result<Vec<DocumentReport>> {
    let documents = parse_documents(manifest)?;
    Ok(plan_documents(&documents, directives))
}

fn plan_documents(documents: &[Value], directives: &[RemovalDirective]) -> Vec<DocumentReport> {
    documents
        .iter()
        .enumerate()
        .map(|(index, document)| {
            let mut report = identify(index, document);
            for directive in directives {
                match resolve_mapping(document, &directive.path) {
                    Ok(mapping) => {
                        // 同一 key 重複列出時只計一次
                        for key in &directive.keys {
                            let qualified = directive.qualified_key(key);
                            if mapping.contains_key(key.as_str()) && !report.removed.contains(&qualified) {
                                report.removed.push(qualified);
                            }
                        }
                    }
                    Err(reason) => {
                        tracing::debug!(
                            "Document {}: directive at '{}' does not apply ({})",
                            index,
                            directive.describe_path(),
                            reason
                        );
                        report.skipped.push(directive.describe_path());
                    }
                }
            }
            report
        })
        .collect()
}

fn identify(index: usize, document: &Value) -> DocumentReport {
    let scalar = |path: &[&str]| {
        get_items(document, path)
            .ok()
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    DocumentReport {
        index,
        kind: scalar(&["kind"]),
        name: scalar(&["metadata", "name"]),
        ..DocumentReport::default()
    }
}

fn resolve_mapping<'a>(document: &'a Value, path: &[String]) -> Result<&'a Mapping> {
    let node = if path.is_empty() {
        document
    } else {
        get_items(document, path)?
    };
    node.as_mapping().ok_or_else(|| PruneError::NotAMapping {
        path: if path.is_empty() {
            ".".to_string()
        } else {
            join_segments(path)
        },
    })
}

fn resolve_mapping_mut<'a>(document: &'a mut Value, path: &[String]) -> Option<&'a mut Mapping> {
    path.iter()
        .try_fold(document, |node, segment| {
            node.as_mapping_mut()?.get_mut(segment.as_str())
        })?
        .as_mapping_mut()
}

fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(".")
}
