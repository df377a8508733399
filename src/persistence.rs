//! Trainer save-record codec.
//!
//! The record is flat, line-oriented text, order-significant and
//! newline-terminated:
//!
//! ```text
//! line 0: trainer display name
//! line 1: rival display name
//! line 2: currency balance
//! line 3: party size N (0..6)
//! line 4: space-separated item counters, fixed catalog order
//! then 7 lines per party creature:
//!     name, health, level, experience, species id, fainted (0|1), max health
//! ```
//!
//! Decoding either produces a complete [`Trainer`] or fails as a whole; a
//! half-read record is never returned. Field values are not range-checked
//! beyond what the format itself requires — in particular a creature's
//! fainted flag is taken at face value even when it disagrees with its
//! health, because the saved flag is the authoritative one.

use crate::creature::Creature;
use crate::errors::{CodecError, CodecResult};
use crate::trainer::{Trainer, PARTY_CAPACITY};
use schema::{ItemId, Species};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use strum::EnumCount;

/// A save record is considered present iff the file exists and is non-empty.
pub fn record_exists(path: &Path) -> bool {
    fs::metadata(path).map(|meta| meta.len() > 0).unwrap_or(false)
}

/// Encode and write the trainer record.
pub fn save(trainer: &Trainer, path: &Path) -> CodecResult<()> {
    fs::write(path, encode(trainer)).map_err(|e| CodecError::Io(e.to_string()))
}

/// Read and decode the trainer record.
pub fn load(path: &Path) -> CodecResult<Trainer> {
    let text = fs::read_to_string(path).map_err(|e| CodecError::Io(e.to_string()))?;
    decode(&text)
}

/// Encode a trainer to the line-oriented record text.
///
/// Names are written verbatim; the format has no escaping, so a name must
/// not contain a newline (nothing in the game can produce one).
pub fn encode(trainer: &Trainer) -> String {
    let mut out = String::new();

    out.push_str(&trainer.name);
    out.push('\n');
    out.push_str(&trainer.rival_name);
    out.push('\n');
    out.push_str(&trainer.money.to_string());
    out.push('\n');
    out.push_str(&trainer.party().len().to_string());
    out.push('\n');

    let counters: Vec<String> = trainer
        .item_counts()
        .iter()
        .map(|count| count.to_string())
        .collect();
    out.push_str(&counters.join(" "));
    out.push('\n');

    for creature in trainer.party() {
        out.push_str(&creature.name);
        out.push('\n');
        out.push_str(&creature.health.to_string());
        out.push('\n');
        out.push_str(&creature.level.to_string());
        out.push('\n');
        out.push_str(&creature.experience.to_string());
        out.push('\n');
        out.push_str(&creature.species.index().to_string());
        out.push('\n');
        out.push_str(if creature.fainted { "1" } else { "0" });
        out.push('\n');
        out.push_str(&creature.max_health.to_string());
        out.push('\n');
    }

    out
}

/// Decode a trainer from record text.
pub fn decode(text: &str) -> CodecResult<Trainer> {
    let mut lines = RecordLines::new(text);

    let name = lines.next_line("trainer name")?.to_string();
    let rival_name = lines.next_line("rival name")?.to_string();
    let money: u32 = lines.next_number("currency balance")?;
    let party_size: usize = lines.next_number("party size")?;

    if party_size > PARTY_CAPACITY {
        return Err(CodecError::PartyTooLarge { size: party_size });
    }

    let counter_line = lines.next_line("item counters")?;
    let mut items = [0u32; ItemId::COUNT];
    let columns: Vec<&str> = counter_line.split_whitespace().collect();
    if columns.len() != ItemId::COUNT {
        return Err(CodecError::ItemCounterMismatch {
            expected: ItemId::COUNT,
            found: columns.len(),
        });
    }
    for (slot, column) in items.iter_mut().zip(columns) {
        *slot = parse_number("item counter", column)?;
    }

    let mut party = Vec::with_capacity(party_size);
    for _ in 0..party_size {
        party.push(decode_creature(&mut lines)?);
    }

    Ok(Trainer::from_record(name, rival_name, money, items, party))
}

fn decode_creature(lines: &mut RecordLines<'_>) -> CodecResult<Creature> {
    let name = lines.next_line("creature name")?.to_string();
    let health: u32 = lines.next_number("creature health")?;
    let level: u32 = lines.next_number("creature level")?;
    let experience: u32 = lines.next_number("creature experience")?;
    let species_id: usize = lines.next_number("creature species id")?;
    let fainted_flag: u32 = lines.next_number("creature fainted flag")?;
    let max_health: u32 = lines.next_number("creature max health")?;

    let species =
        Species::from_index(species_id).ok_or(CodecError::UnknownSpecies { id: species_id })?;

    Ok(Creature {
        name,
        species,
        level,
        health,
        max_health,
        experience,
        // Any non-zero integer counts as fainted.
        fainted: fainted_flag != 0,
        next_level_up: level.saturating_mul(crate::creature::EXP_PER_LEVEL),
    })
}

/// Cursor over the record's lines, reporting which field was being read
/// when the record ran out or failed to parse.
struct RecordLines<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> RecordLines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
        }
    }

    fn next_line(&mut self, field: &'static str) -> CodecResult<&'a str> {
        self.lines.next().ok_or(CodecError::Truncated { field })
    }

    fn next_number<T: FromStr>(&mut self, field: &'static str) -> CodecResult<T> {
        let line = self.next_line(field)?;
        parse_number(field, line)
    }
}

fn parse_number<T: FromStr>(field: &'static str, value: &str) -> CodecResult<T> {
    value.trim().parse().map_err(|_| CodecError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
