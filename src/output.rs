//! Output formatting for strand results

use crate::tree::{CommonSubstring, DocId, SuffixTree, TreeStats};
use crate::utils::{escape_bytes, hex_string};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// A result ready for printing, with document ids resolved to file names
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Length of the strand in bytes
    pub length: usize,
    /// Number of documents searched
    pub total_documents: usize,
    /// The strand as lowercase hex
    pub strand_hex: String,
    /// The strand with non-printable bytes escaped
    pub strand_text: String,
    /// Documents containing the strand
    pub documents: Vec<ReportDocument>,
    /// Every occurrence, ordered by position
    pub occurrences: Vec<ReportOccurrence>,
    #[serde(skip)]
    bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub id: DocId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportOccurrence {
    pub doc_id: DocId,
    pub name: String,
    /// Offset within the document
    pub offset: usize,
    /// Offset in the concatenated text
    pub global_offset: usize,
}

impl Report {
    /// Build a report; `names[i]` is the name of document `i`
    pub fn new(tree: &SuffixTree, found: &CommonSubstring, names: &[PathBuf]) -> Self {
        let name_of = |doc_id: DocId| {
            names
                .get(doc_id as usize)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| format!("#{}", doc_id))
        };

        let documents = found
            .documents
            .iter()
            .map(|&id| ReportDocument {
                id,
                name: name_of(id),
            })
            .collect();

        let occurrences = tree
            .occurrences(found)
            .into_iter()
            .map(|o| ReportOccurrence {
                doc_id: o.doc_id,
                name: name_of(o.doc_id),
                offset: o.local_offset,
                global_offset: o.global_offset,
            })
            .collect();

        Self {
            length: found.len(),
            total_documents: tree.document_count(),
            strand_hex: hex_string(&found.bytes),
            strand_text: escape_bytes(&found.bytes),
            documents,
            occurrences,
            bytes: found.bytes.clone(),
        }
    }
}

/// Print a report as colored text on stdout
pub fn print_report(report: &Report, color: ColorChoice, preview_bytes: usize) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color);
    write_report(&mut stdout, report, preview_bytes)
}

/// Write a report as text
///
/// Only the first `preview_bytes` bytes of the strand are shown.
pub fn write_report<W: WriteColor>(
    out: &mut W,
    report: &Report,
    preview_bytes: usize,
) -> io::Result<()> {
    if report.length == 0 {
        writeln!(
            out,
            "No common strand found across {} files",
            report.total_documents
        )?;
        return Ok(());
    }

    let shown = report.bytes.len().min(preview_bytes);
    write!(out, "Longest strand: ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "{}", escape_bytes(&report.bytes[..shown]))?;
    out.reset()?;
    if shown < report.bytes.len() {
        write!(out, "...")?;
    }
    writeln!(out)?;

    writeln!(out, "Length: {} bytes", report.length)?;
    writeln!(
        out,
        "Shared by {} of {} files",
        report.documents.len(),
        report.total_documents
    )?;

    for occ in &report.occurrences {
        write!(out, "  ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(out, "{}", occ.name)?;
        out.reset()?;
        write!(out, " at offset ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "{}", occ.offset)?;
        out.reset()?;
    }

    Ok(())
}

/// Print a report as pretty JSON on stdout
pub fn print_json(report: &Report) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, report)?;
    writeln!(handle)?;
    Ok(())
}

/// Print tree statistics to stderr
pub fn print_stats(stats: &TreeStats) {
    eprintln!("Suffix tree statistics");
    eprintln!("======================");
    eprintln!("Documents:        {}", stats.doc_count);
    eprintln!("Text length:      {}", stats.text_len);
    eprintln!("Nodes:            {}", stats.node_count);
    eprintln!("  Leaves:         {}", stats.leaf_count);
    eprintln!("  Internal:       {}", stats.internal_count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    fn render(report: &Report, preview: usize) -> String {
        let mut out = NoColor::new(Vec::new());
        write_report(&mut out, report, preview).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    fn sample() -> Report {
        let tree = SuffixTree::build_labeled(&["33", "AA2222", "BBB2222", "CCC33333"]).unwrap();
        let found = tree.longest_common_substring().unwrap();
        let names: Vec<PathBuf> = ["a", "b", "c", "d"].iter().map(PathBuf::from).collect();
        Report::new(&tree, &found, &names)
    }

    #[test]
    fn test_report_fields() {
        let report = sample();
        assert_eq!(report.length, 4);
        assert_eq!(report.total_documents, 4);
        assert_eq!(report.strand_hex, "32323232");
        assert_eq!(report.strand_text, "2222");
        assert_eq!(report.documents.len(), 2);
        assert_eq!(report.documents[0].name, "b");
        assert_eq!(report.occurrences[1].name, "c");
        assert_eq!(report.occurrences[1].offset, 3);
        assert_eq!(report.occurrences[1].global_offset, 13);
    }

    #[test]
    fn test_text_output() {
        let text = render(&sample(), 64);
        assert_eq!(
            text,
            "Longest strand: 2222\n\
             Length: 4 bytes\n\
             Shared by 2 of 4 files\n  \
             b at offset 2\n  \
             c at offset 3\n"
        );
    }

    #[test]
    fn test_text_output_truncated() {
        let text = render(&sample(), 2);
        assert!(text.starts_with("Longest strand: 22...\n"));
    }

    #[test]
    fn test_empty_report() {
        let tree = SuffixTree::build_labeled(&["abc", "xyz"]).unwrap();
        let found = tree.longest_common_substring().unwrap();
        let report = Report::new(&tree, &found, &[]);

        assert_eq!(render(&report, 64), "No common strand found across 2 files\n");
    }

    #[test]
    fn test_json_output() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["length"], 4);
        assert_eq!(json["strand_hex"], "32323232");
        assert_eq!(json["documents"][1]["id"], 2);
        assert_eq!(json["occurrences"][0]["offset"], 2);
        assert!(json.get("bytes").is_none());
    }
}
