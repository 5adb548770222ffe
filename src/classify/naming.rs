use crate::error::ClassifierError;

/// Map a judge language identifier to a file extension.
pub fn extension_for(language: &str) -> Option<&'static str> {
    match language {
        "python3" | "python" => Some("py"),
        "java" => Some("java"),
        "cpp" => Some("cpp"),
        "c" => Some("c"),
        "csharp" => Some("cs"),
        "javascript" => Some("js"),
        "mysql" | "mssql" => Some("sql"),
        _ => None,
    }
}

/// Build `[{difficulty}-]{frontend_id}-{title_slug}.{ext}`.
pub fn file_name(
    frontend_id: &str,
    title_slug: &str,
    language: &str,
    difficulty: Option<&str>,
) -> Result<String, ClassifierError> {
    let Some(extension) = extension_for(language) else {
        return Err(ClassifierError::UnsupportedLanguage(language.to_string()));
    };
    let base = format!("{frontend_id}-{title_slug}.{extension}");
    match difficulty {
        Some(label) if !label.is_empty() => Ok(format!("{label}-{base}")),
        _ => Ok(base),
    }
}
