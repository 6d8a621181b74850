use crate::core::{ChainEdge, ConformanceReport, RuleVerdict};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ConformanceReport) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(writer: W, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ConformanceReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ConformanceReport) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_rule_evaluation(&report.verdicts)?;
        self.write_mapping_table(report)?;
        self.write_chains(&report.chains)?;
        self.write_gaps(&report.gaps)?;
        self.write_remediations(&report.gaps)?;
        self.write_coverage(report)?;
        self.write_excerpts(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# Architecture Conformance Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Executive Summary")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "This report maps codebase entities to documented architecture components, \
             evaluates the document's dependency rules, and lists gaps between the two."
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_rule_evaluation(&mut self, verdicts: &[RuleVerdict]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Detailed Rule Evaluation")?;
        writeln!(self.writer)?;
        if verdicts.is_empty() {
            writeln!(self.writer, "No rule verdicts were produced.")?;
        }
        for verdict in verdicts {
            let dependency = verdict.rule.must_depend_on.as_deref().unwrap_or("-");
            writeln!(
                self.writer,
                "- Rule: `{}` must depend on `{}`\n  - Component: {}\n  - Result: {}",
                verdict.rule.component, dependency, verdict.component, verdict.outcome
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_mapping_table(&mut self, report: &ConformanceReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Matched Components")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Class | Annotation | Architecture Component | Methods | Fields |"
        )?;
        writeln!(
            self.writer,
            "|-------|------------|-----------------------|---------|--------|"
        )?;
        for row in &report.mapping {
            writeln!(
                self.writer,
                "| {} | @{} | {} | {} | {} |",
                row.identity,
                row.marker,
                row.arch_component,
                row.methods.join(", "),
                row.fields.join(", ")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_chains(&mut self, chains: &[ChainEdge]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Layering Observations")?;
        writeln!(self.writer)?;
        if chains.is_empty() {
            writeln!(self.writer, "No layering references were observed.")?;
        }
        for edge in chains {
            writeln!(
                self.writer,
                "- `{}` references the {} layer.",
                edge.from, edge.layer
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_gaps(&mut self, gaps: &[String]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Gaps & Missing Components")?;
        writeln!(self.writer)?;
        if gaps.is_empty() {
            writeln!(self.writer, "Every extracted class is mapped to the architecture.")?;
        }
        for gap in gaps {
            writeln!(
                self.writer,
                "- {gap} is present in code but not mapped to any architecture component."
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_remediations(&mut self, gaps: &[String]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Suggested Remediations")?;
        writeln!(self.writer)?;
        if gaps.is_empty() {
            writeln!(self.writer, "None.")?;
        }
        for gap in gaps {
            writeln!(
                self.writer,
                "- Review class `{gap}` and annotate or refactor to align with the architecture."
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_coverage(&mut self, report: &ConformanceReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Coverage Statistics")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Total classes analyzed: {}",
            report.coverage.total_entities
        )?;
        writeln!(
            self.writer,
            "- Classes mapped to architecture: {}",
            report.coverage.mapped_entities
        )?;
        match report.coverage.percent {
            Some(percent) => writeln!(self.writer, "- Coverage: {percent:.2}%")?,
            None => writeln!(self.writer, "- Coverage: no data (no classes analyzed)")?,
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_excerpts(&mut self, report: &ConformanceReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Embedded Examples")?;
        writeln!(self.writer)?;
        if let Some(excerpt) = &report.code_excerpt {
            writeln!(self.writer, "### Example Matched Class")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "```java")?;
            writeln!(self.writer, "{excerpt}")?;
            writeln!(self.writer, "```")?;
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "### Architecture Document Fragment")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "```")?;
        writeln!(self.writer, "{}", report.doc_excerpt)?;
        writeln!(self.writer, "```")?;
        Ok(())
    }
}
