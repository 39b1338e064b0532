//! Weight/rep grammar for the work text of a lift line.
//!
//! The work text is a `;`-separated list of weight groups. Each group pairs
//! a weight blob (one or more `/`-joined numbers) with a rep blob (one or
//! more comma-separated rep tokens). Parenthesized free-text comments are
//! stripped before grouping.

use crate::error::ParseError;
use crate::types::Set;
use once_cell::sync::Lazy;
use regex::Regex;

/// Parenthesized comments, one level deep, removed wholesale
static RE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]+\)").unwrap());

/// A full weight token: optional sign, integer or decimal number
static RE_WEIGHT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?P<weight>\d+(?:\.\d+)?)$").unwrap());

/// The four rep-token shapes, tried as whole-token alternatives:
/// bare integer, seconds (`30s`), multi (`8/6`), myo (`8+4+2`)
static RE_REP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?P<single>\d+)|(?P<seconds>\d+)s|(?P<multi>\d+(?:/\d+)+)|(?P<myo>\d+(?:\+\d+)+))$",
    )
    .unwrap()
});

/// Parse the work text of a lift line into its sets.
///
/// Fails fast on the first malformed weight or rep token. Groups the user
/// started but abandoned (a bare weight with no reps, or an empty segment
/// from a trailing `;`) are skipped silently.
pub fn parse_sets(work: &str) -> Result<Vec<Set>, ParseError> {
    let cleaned = RE_COMMENT.replace_all(work, "");

    let mut sets = Vec::new();
    for group in cleaned.split(';') {
        let group = group.trim();

        // First maximal run of non-space characters is the weight blob.
        let weight_blob = match group.split(' ').next() {
            Some(blob) if !blob.is_empty() => blob,
            _ => continue,
        };

        let rep_blob = group[weight_blob.len()..].trim();
        if rep_blob.is_empty() {
            continue;
        }

        let weights = parse_weights(weight_blob)?;
        parse_reps_into(&mut sets, &weights, weight_blob, rep_blob)?;
    }

    Ok(sets)
}

/// Split a weight blob on `/` and parse each token.
///
/// The numeric value is the unsigned magnitude; a leading sign is accepted
/// but does not negate (assistance notation like `-20` records the stack
/// weight itself).
fn parse_weights(weight_blob: &str) -> Result<Vec<f64>, ParseError> {
    let mut weights = Vec::new();
    for token in weight_blob.split('/') {
        let caps = RE_WEIGHT
            .captures(token)
            .ok_or_else(|| ParseError::InvalidWeight(token.to_string()))?;
        let value: f64 = caps["weight"]
            .parse()
            .map_err(|_| ParseError::InvalidWeight(token.to_string()))?;
        weights.push(value);
    }
    Ok(weights)
}

/// Classify each rep token of a group and push the resulting sets.
fn parse_reps_into(
    sets: &mut Vec<Set>,
    weights: &[f64],
    weight_blob: &str,
    rep_blob: &str,
) -> Result<(), ParseError> {
    // Trailing comma is tolerated; then split on comma + optional spaces.
    let rep_blob = rep_blob.strip_suffix(',').unwrap_or(rep_blob);

    for raw in rep_blob.split(',') {
        let token = raw.trim();
        let caps = RE_REP
            .captures(token)
            .ok_or_else(|| ParseError::InvalidRep(format!("[{}]", token)))?;

        if let Some(single) = caps.name("single") {
            let weight = single_weight(weights, "a simple rep")?;
            sets.push(Set::Single {
                weight,
                reps: parse_count(single.as_str(), token)?,
                myo: false,
            });
        } else if let Some(seconds) = caps.name("seconds") {
            let weight = single_weight(weights, "a timed rep")?;
            sets.push(Set::Timed {
                weight,
                seconds: parse_count(seconds.as_str(), token)?,
            });
        } else if let Some(myo) = caps.name("myo") {
            let weight = single_weight(weights, "a simple rep")?;
            let mut reps = 0u32;
            for burst in myo.as_str().split('+') {
                reps += parse_count(burst, token)?;
            }
            sets.push(Set::Single {
                weight,
                reps,
                myo: true,
            });
        } else if let Some(multi) = caps.name("multi") {
            let mut reps = Vec::new();
            for part in multi.as_str().split('/') {
                reps.push(parse_count(part, token)?);
            }
            if weights.len() == 1 && reps.len() == 2 {
                sets.push(Set::Split {
                    weight: weights[0],
                    left_reps: reps[0],
                    right_reps: reps[1],
                });
            } else if weights.len() == reps.len() {
                sets.push(Set::Drop {
                    weights: weights.to_vec(),
                    reps,
                });
            } else {
                return Err(ParseError::InvalidRep(format!(
                    "Mismatched count of weights and reps [{}] : [{}]",
                    weight_blob, rep_blob
                )));
            }
        }
    }

    Ok(())
}

fn single_weight(weights: &[f64], what: &str) -> Result<f64, ParseError> {
    if weights.len() != 1 {
        return Err(ParseError::InvalidRep(format!(
            "Expected one weight for {}",
            what
        )));
    }
    Ok(weights[0])
}

fn parse_count(digits: &str, token: &str) -> Result<u32, ParseError> {
    digits
        .parse()
        .map_err(|_| ParseError::InvalidRep(format!("[{}]", token)))
}
