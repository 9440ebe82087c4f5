use crate::{Palette, Style};
use idguard_types::{FileStatus, IdguardReport, RunCounts};

/// Render a report as console lines, in report file order.
///
/// A missing exclusion file is announced first. Each validated file prints its
/// excluded logical ids, then one verdict line. The summary line closes the output.
pub fn render_text(report: &IdguardReport, palette: &Palette) -> Vec<String> {
    let mut out = Vec::new();

    if !report.exclusions.found {
        out.push(palette.paint(
            Style::Plain,
            &format!("Exclusion file {} not found!", report.exclusions.path),
        ));
    }

    for file in &report.files {
        for id in &file.excluded_resources {
            out.push(palette.paint(Style::Error, &format!("Skipping Logical ID: {id}")));
        }

        let line = match (file.status, &file.finding) {
            (FileStatus::Skipped, _) => palette.paint(
                Style::Error,
                &format!("Skipping {} file: {}", file.path.file_name(), file.path),
            ),
            (FileStatus::Compliant, _) => {
                palette.paint(Style::Compliant, &format!("Compliant: {}", file.path))
            }
            (_, Some(finding)) => {
                palette.paint(Style::Error, &format!("Error: {}", finding.message))
            }
            // A failing status always carries its finding; keep the line anyway.
            (status, None) => palette.paint(
                Style::Error,
                &format!("Error: {} ({status:?})", file.path),
            ),
        };
        out.push(line);
    }

    out.push(palette.paint(Style::Plain, &render_summary(&report.counts)));
    out
}

pub fn render_summary(counts: &RunCounts) -> String {
    format!(
        "{} file(s) checked: {} compliant, {} non-compliant, {} parse error(s), {} read error(s), {} skipped",
        counts.checked,
        counts.compliant,
        counts.non_compliant,
        counts.parse_errors,
        counts.read_errors,
        counts.skipped
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{finding, record, report};

    #[test]
    fn renders_mixed_run() {
        let mut stack = record("stacks/app.yaml", FileStatus::Compliant);
        stack.excluded_resources = vec!["LegacyQueue".to_string()];
        let mut bad = record("stacks/bad.json", FileStatus::NonCompliant);
        bad.finding = Some(finding(
            "Missing or invalid resource type for 'Handler' in 'stacks/bad.json'.",
        ));

        let r = report(
            false,
            vec![record("env/clusters.json", FileStatus::Skipped), stack, bad],
        );

        insta::assert_snapshot!(render_text(&r, &Palette::plain()).join("\n"), @r"
        Exclusion file exclusion_list.txt not found!
        Skipping clusters.json file: env/clusters.json
        Skipping Logical ID: LegacyQueue
        Compliant: stacks/app.yaml
        Error: Missing or invalid resource type for 'Handler' in 'stacks/bad.json'.
        2 file(s) checked: 1 compliant, 1 non-compliant, 0 parse error(s), 0 read error(s), 1 skipped
        ");
    }

    #[test]
    fn found_exclusion_file_prints_no_warning() {
        let r = report(true, vec![record("a.yaml", FileStatus::Compliant)]);
        insta::assert_snapshot!(render_text(&r, &Palette::plain()).join("\n"), @r"
        Compliant: a.yaml
        1 file(s) checked: 1 compliant, 0 non-compliant, 0 parse error(s), 0 read error(s), 0 skipped
        ");
    }

    #[test]
    fn skip_lines_use_the_file_name_not_the_fragment() {
        let r = report(
            true,
            vec![record("clusters.json/inner.yaml", FileStatus::Skipped)],
        );
        let lines = render_text(&r, &Palette::plain());
        assert_eq!(lines[0], "Skipping inner.yaml file: clusters.json/inner.yaml");
    }

    #[test]
    fn ansi_palette_styles_verdicts_but_not_the_summary() {
        let mut bad = record("b.yaml", FileStatus::ParseError);
        bad.finding = Some(finding("Failed to parse YAML file: b.yaml: boom"));
        let r = report(true, vec![record("a.yaml", FileStatus::Compliant), bad]);

        let lines = render_text(&r, &Palette::ansi());
        assert_eq!(lines[0], "\x1b[32mCompliant: a.yaml\x1b[0m");
        assert_eq!(
            lines[1],
            "\x1b[31mError: Failed to parse YAML file: b.yaml: boom\x1b[0m"
        );
        assert!(!lines[2].contains('\x1b'));
    }
}
