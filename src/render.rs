//! Terminal layout of fact-check reports.

use crate::report::{Fact, FactReport, Scalar, Source, Verdict};

fn marker(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Supported => "✔",
        Verdict::Refuted => "✘",
        Verdict::Unverified => "?",
    }
}

// Falsy scores (0, "") read as "no score", same as a missing one.
fn confidence_label(confidence: Option<&Scalar>) -> String {
    match confidence {
        Some(Scalar::Number(n)) if *n != 0.0 => format!("{}%", Scalar::Number(*n)),
        Some(Scalar::Text(t)) if !t.is_empty() => format!("{t}%"),
        _ => "N/A".to_string(),
    }
}

fn source_line(source: &Source) -> String {
    match (&source.title, &source.url) {
        (Some(title), Some(url)) => format!("{title} <{url}>"),
        _ => source.label().to_string(),
    }
}

fn push_fact(out: &mut String, index: usize, fact: &Fact) {
    let claim = if fact.claim.is_empty() {
        "Claim"
    } else {
        fact.claim.as_str()
    };

    out.push_str(&format!("{:>2}. {} {}", index + 1, marker(fact.verdict()), claim));
    if let Some(timestamp) = &fact.timestamp {
        out.push_str(&format!("  {timestamp}"));
    }
    out.push('\n');

    let explanation = if fact.explanation.is_empty() {
        "No explanation provided."
    } else {
        fact.explanation.as_str()
    };
    out.push_str(&format!("    {explanation}\n"));

    out.push_str(&format!(
        "    Confidence: {}\n",
        confidence_label(fact.confidence.as_ref())
    ));

    if !fact.sources.is_empty() {
        out.push_str("    Sources:\n");
        for source in &fact.sources {
            out.push_str(&format!("      - {}\n", source_line(source)));
        }
    }
}

/// Lay out a whole report, heading included.
pub fn render_report(report: &FactReport) -> String {
    let mut out = String::from("Fact-Check Results\n\n");

    if report.is_empty() {
        out.push_str("No fact-checking results found.\n");
        return out;
    }

    for (index, fact) in report.facts.iter().enumerate() {
        push_fact(&mut out, index, fact);
        out.push('\n');
    }
    out
}
