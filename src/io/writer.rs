//! Text output writer.
//!
//! Matchings are written one pair per line as `"proposer receiver"`, in the
//! order the engine produced them. Instances are written in the format read
//! by [`read_instance`](crate::io::read_instance).

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::types::{Instance, Pair};

/// Write a matching, one pair per line.
pub fn write_matching<W: Write>(mut writer: W, pairs: &[Pair]) -> io::Result<()> {
    for pair in pairs {
        writeln!(writer, "{}", pair)?;
    }
    writer.flush()
}

/// Write a matching to a file, replacing it if it exists.
pub fn write_matching_to_path<P: AsRef<Path>>(path: P, pairs: &[Pair]) -> io::Result<()> {
    write_matching(BufWriter::new(File::create(path)?), pairs)
}

/// Write an instance: `n`, then the proposer lists, then the receiver lists.
pub fn write_instance<W: Write>(mut writer: W, instance: &Instance) -> io::Result<()> {
    writeln!(writer, "{}", instance.size())?;
    for list in instance.proposer_prefs().iter().chain(instance.receiver_prefs()) {
        write_row(&mut writer, list)?;
    }
    writer.flush()
}

/// Write an instance to a file, replacing it if it exists.
pub fn write_instance_to_path<P: AsRef<Path>>(path: P, instance: &Instance) -> io::Result<()> {
    write_instance(BufWriter::new(File::create(path)?), instance)
}

fn write_row<W: Write>(writer: &mut W, list: &[usize]) -> io::Result<()> {
    let mut ids = list.iter();
    if let Some(first) = ids.next() {
        write!(writer, "{}", first)?;
        for id in ids {
            write!(writer, " {}", id)?;
        }
    }
    writeln!(writer)
}

// ============================================================================
// Unit Tests
// ============================================================================
