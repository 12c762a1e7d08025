// html.rs - HTML summary report

use crate::core::SummaryReport;
use crate::data::record::SampleRecord;
use std::fmt::Write as FmtWrite;

const PLACEHOLDER: &str = "-";

const STYLE: &str = "\
    body { font-family: sans-serif; background: #f4f7f6; padding: 20px; }
    .card { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); max-width: 1200px; margin: auto; }
    h1 { color: #2c3e50; border-bottom: 2px solid #3498db; padding-bottom: 10px; }
    table { width: 100%; border-collapse: collapse; margin-top: 20px; }
    th, td { padding: 12px; text-align: left; border-bottom: 1px solid #eee; }
    th { background: #2c3e50; color: white; }
    .badge { padding: 2px 8px; border-radius: 10px; font-size: 0.8em; background: #eef2f7; }
    .amr-sec { margin-bottom: 10px; border-left: 4px solid #3498db; padding-left: 10px; }
    .amr-lab { font-weight: bold; font-size: 0.8em; color: #2c3e50; display: block; }
    .pan { display: flex; gap: 20px; margin: 20px 0; }
    .pan div { flex: 1; background: #f8fafc; padding: 15px; text-align: center; border-radius: 5px; }
";

/// Escape text for HTML element content
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn or_placeholder(value: Option<String>) -> String {
    escape(&value.unwrap_or_else(|| PLACEHOLDER.to_string()))
}

/// Render the report; `generated` is the timestamp shown in the title
pub fn render_html(report: &SummaryReport, generated: &str) -> Result<String, String> {
    let mut html = String::with_capacity(16 * 1024);
    write_document(&mut html, report, generated).map_err(|e| format!("Render error: {}", e))?;
    Ok(html)
}

fn write_document(html: &mut String, report: &SummaryReport, generated: &str) -> std::fmt::Result {
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html><head><meta charset=\"utf-8\"/><title>Bacterial Genome Report</title>")?;
    writeln!(html, "<style>\n{}</style></head>", STYLE)?;
    writeln!(html, "<body><div class=\"card\">")?;
    writeln!(
        html,
        "<h1>Bacterial Genome Analysis Summary <small style=\"font-size:0.4em; color:grey;\">{}</small></h1>",
        escape(generated)
    )?;

    if let Some(pan) = &report.pan_genome {
        writeln!(html, "<div class=\"pan\">")?;
        writeln!(html, "<div><b>{}</b><br>Core Genes</div>", or_placeholder(pan.core_genes.clone()))?;
        writeln!(html, "<div><b>{}</b><br>Total Genes</div>", or_placeholder(pan.total_genes.clone()))?;
        writeln!(html, "</div>")?;
    }

    writeln!(html, "<table><thead><tr><th>Sample</th><th>Taxonomy</th><th>Reads</th><th>Yield(Mb)</th><th>Contigs</th><th>N50</th></tr></thead><tbody>")?;
    for record in report.samples.values() {
        write_qc_row(html, record)?;
    }
    writeln!(html, "</tbody></table>")?;

    writeln!(html, "<h2>Resistome &amp; MLST Profile</h2>")?;
    writeln!(html, "<table><thead><tr><th>Sample</th><th>MLST</th><th>AMR</th><th>Detailed Categorized Resistome</th></tr></thead><tbody>")?;
    for record in report.samples.values() {
        write_resistome_row(html, record)?;
    }
    writeln!(html, "</tbody></table></div></body></html>")?;
    Ok(())
}

fn write_qc_row(html: &mut String, record: &SampleRecord) -> std::fmt::Result {
    let taxonomy = record
        .taxonomy
        .as_ref()
        .map(|t| t.display())
        .unwrap_or_else(|| "Unknown".to_string());
    let assembly = record.assembly.as_ref();

    writeln!(
        html,
        "<tr><td><b>{}</b></td><td><span class=\"badge\">{}</span></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape(&record.sample),
        escape(&taxonomy),
        or_placeholder(record.read_stats.as_ref().map(|s| s.reads_display())),
        or_placeholder(record.read_stats.as_ref().map(|s| s.yield_display())),
        or_placeholder(assembly.and_then(|a| a.contigs.clone())),
        or_placeholder(assembly.and_then(|a| a.n50_display())),
    )
}

fn write_resistome_row(html: &mut String, record: &SampleRecord) -> std::fmt::Result {
    let typing = or_placeholder(record.typing.as_ref().map(|t| t.display()));
    let total = record.total_features().unwrap_or(0);

    let mut sections = String::new();
    if let Some(features) = &record.features {
        for (category, bucket) in features.categorized() {
            write!(
                sections,
                "<div class=\"amr-sec\"><span class=\"amr-lab\">{} ({})</span><div style=\"font-size:0.85em;\">{}</div></div>",
                category,
                bucket.hits,
                escape(&bucket.joined())
            )?;
        }
    }
    if sections.is_empty() {
        sections.push_str("None");
    }

    writeln!(
        html,
        "<tr><td><b>{}</b></td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape(&record.sample),
        typing,
        total,
        sections
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SummaryAggregator;
    use crate::data::feature::FeatureRecord;
    use crate::data::record::{Contribution, FeatureProfile, PanGenomeSummary, TypingCall};

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_render_placeholders_and_sections() {
        let mut agg = SummaryAggregator::default();
        agg.contribute(
            "s1",
            Contribution::Features(FeatureProfile::from_records(vec![
                FeatureRecord::new("blaTEM", "AMR", "BETA-LACTAM"),
                FeatureRecord::new("blaTEM", "AMR", "BETA-LACTAM"),
            ])),
        );
        agg.contribute(
            "s2",
            Contribution::Typing(TypingCall {
                scheme: "ecoli".to_string(),
                sequence_type: "131".to_string(),
            }),
        );
        agg.set_pan_genome(PanGenomeSummary {
            core_genes: Some("3000".to_string()),
            total_genes: None,
        });
        let report = agg.finish();

        let html = render_html(&report, "2024-01-01 10:00").unwrap();
        assert!(html.contains("2024-01-01 10:00"));
        assert!(html.contains("<b>3000</b><br>Core Genes"));
        assert!(html.contains("<b>-</b><br>Total Genes"));
        assert!(html.contains("AMR (2)"));
        assert!(html.contains("blaTEM (BETA-LACTAM)"));
        assert!(html.contains("<td>ecoli: 131</td><td>0</td><td>None</td>"));
        assert!(html.contains("<span class=\"badge\">Unknown</span>"));
    }

    #[test]
    fn test_no_pan_genome_panel_without_data() {
        let report = SummaryAggregator::default().finish();
        let html = render_html(&report, "now").unwrap();
        assert!(!html.contains("Core Genes"));
        assert!(html.contains("</html>"));
    }
}
