//! Text and JSON rendering of a ranking

use std::fmt::{self, Write};

use serde::Serialize;
use shift_cryptanalysis::{Candidate, Ranking, SAMPLES, Verdict};

const RULE_WIDTH: usize = 80;

/// Machine-readable output: the verdict followed by every candidate.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    verdict: &'a Verdict,
    ranking: &'a Ranking,
}

pub fn json(ranking: &Ranking, verdict: &Verdict) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport { verdict, ranking })
}

fn rule(out: &mut String, c: char) -> fmt::Result {
    writeln!(out, "{}", c.to_string().repeat(RULE_WIDTH))
}

fn title(out: &mut String, text: &str) -> fmt::Result {
    rule(out, '=')?;
    writeln!(out, "{}", text)?;
    rule(out, '=')
}

pub fn header(ciphertext: &str, original_length: usize) -> Result<String, fmt::Error> {
    let mut out = String::new();
    title(&mut out, "BRUTE-FORCE ATTACK")?;
    writeln!(out, "Ciphertext: {}", ciphertext)?;
    writeln!(out, "Length:     {} letters", original_length)?;
    Ok(out)
}

/// Every candidate in key order.
pub fn table(ranking: &Ranking) -> Result<String, fmt::Error> {
    let mut by_key: Vec<&Candidate> = ranking.candidates().iter().collect();
    by_key.sort_by_key(|c| c.key);

    let mut out = String::new();
    rule(&mut out, '-')?;
    writeln!(out, "{:^5} | {:^35} | {:^10}", "Key", "Decryption", "Score")?;
    rule(&mut out, '-')?;
    for candidate in by_key {
        writeln!(
            out,
            "{:^5} | {:^35} | {:^10.1}",
            candidate.key, candidate.plaintext, candidate.score
        )?;
    }
    rule(&mut out, '-')?;
    Ok(out)
}

/// The `n` best candidates with their metrics.
pub fn top(ranking: &Ranking, n: usize) -> Result<String, fmt::Error> {
    let best = ranking.top(n);

    let mut out = String::new();
    title(&mut out, &format!("TOP {} MOST LIKELY SOLUTIONS", best.len()))?;
    for (rank, candidate) in best.iter().enumerate() {
        let marker = if rank == 0 { " <- BEST" } else { "" };
        writeln!(
            out,
            "{}. Key {:2} | Score: {:5.1}%{}",
            rank + 1,
            candidate.key,
            candidate.score,
            marker
        )?;
        writeln!(out, "   Message: {}", candidate.plaintext)?;
        writeln!(
            out,
            "   Chi2={:6.2} | Words={} | IC={:.3}",
            candidate.metrics.chi_squared,
            candidate.metrics.known_word_count,
            candidate.metrics.index_of_coincidence
        )?;
    }
    Ok(out)
}

pub fn verdict(verdict: &Verdict) -> Result<String, fmt::Error> {
    let mut out = String::new();
    title(&mut out, "VERDICT")?;
    writeln!(out, "Detected key:      {}", verdict.key)?;
    writeln!(out, "Decrypted message: {}", verdict.plaintext)?;
    writeln!(out, "Confidence:        {:.1}%", verdict.score)?;
    writeln!(
        out,
        "{}: {}",
        capitalize(verdict.confidence.label()),
        verdict.confidence.advice()
    )?;
    if verdict.known_words > 0 {
        writeln!(out, "{} known word(s) recognized", verdict.known_words)?;
    }
    Ok(out)
}

pub fn samples() -> Result<String, fmt::Error> {
    let mut out = String::new();
    for (i, sample) in SAMPLES.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, sample.title)?;
        writeln!(out, "   Ciphertext: {}", sample.ciphertext)?;
        writeln!(out, "   Key:        {}", sample.key)?;
        writeln!(out, "   Plaintext:  {}", sample.plaintext)?;
    }
    Ok(out)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shift_cryptanalysis::rank;

    #[test]
    fn test_json_carries_verdict_and_ranking() {
        let ranking = rank("ERQMRXU");
        let out = json(&ranking, &ranking.verdict()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["verdict"]["key"], 3);
        assert_eq!(value["verdict"]["plaintext"], "BONJOUR");
        assert_eq!(value["verdict"]["confidence"], "medium");
        assert_eq!(value["verdict"]["known_words"], 1);
        assert_eq!(value["ranking"]["original_length"], 7);
        assert_eq!(value["ranking"]["candidates"].as_array().unwrap().len(), 25);
        assert_eq!(value["ranking"]["candidates"][0]["key"], 3);
    }

    #[test]
    fn test_table_lists_every_key_in_order() {
        let out = table(&rank("ERQMRXU")).unwrap();
        let rows: Vec<&str> = out.lines().filter(|l| l.contains(" | ")).skip(1).collect();
        assert_eq!(rows.len(), 25);
        assert!(rows[0].trim_start().starts_with('1'));
        assert!(rows[2].contains("BONJOUR"));
    }

    #[test]
    fn test_header() {
        let out = header("ERQMRXU", 7).unwrap();
        assert!(out.contains("BRUTE-FORCE ATTACK"));
        assert!(out.contains("Length:     7 letters"));
    }

    #[test]
    fn test_top_marks_best() {
        let out = top(&rank("ERQMRXU"), 3).unwrap();
        assert!(out.contains("TOP 3"));
        assert!(out.contains("1. Key  3"));
        assert_eq!(out.matches("<- BEST").count(), 1);
    }

    #[test]
    fn test_verdict_reports_words() {
        let out = verdict(&rank("YHQL YLGL YLFL").verdict()).unwrap();
        assert!(out.contains("Detected key:      3"));
        assert!(out.contains("VENI VIDI VICI"));
        assert!(out.contains("3 known word(s) recognized"));
        assert!(out.contains("Medium confidence"));
    }

    #[test]
    fn test_verdict_without_words() {
        let out = verdict(&rank("1234").verdict()).unwrap();
        assert!(out.contains("Low confidence"));
        assert!(!out.contains("known word"));
    }

    #[test]
    fn test_samples_listing() {
        let out = samples().unwrap();
        assert!(out.contains("PELCGBTENCUVR"));
        assert_eq!(out.lines().count(), SAMPLES.len() * 4);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("low confidence"), "Low confidence");
        assert_eq!(capitalize(""), "");
    }
}
