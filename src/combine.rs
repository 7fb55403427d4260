use crate::models::{CombinedDocument, SourceFile};

/// Delimiter inserted between files in a combined document.
pub const FILE_DELIMITER: &str = "\n\n---\n\n";

/// Merge source files into a single document.
///
/// A single file passes through verbatim, with no header or separator
/// injected. Multiple files become `# <name>` blocks joined by
/// [`FILE_DELIMITER`], in input order. An empty slice yields an empty
/// document; callers reject empty input upstream.
pub fn combine(files: &[SourceFile]) -> CombinedDocument {
    let file_list: Vec<String> = files.iter().map(|f| f.name.clone()).collect();

    let text = match files {
        [single] => single.content.clone(),
        _ => files
            .iter()
            .map(|f| format!("# {}\n\n{}", f.name, f.content))
            .collect::<Vec<_>>()
            .join(FILE_DELIMITER),
    };

    CombinedDocument { text, file_list }
}
