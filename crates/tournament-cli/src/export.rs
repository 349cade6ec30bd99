//! Human-readable history export.
//!
//! One directory per strategy, one file per opponent. Each line is one
//! complete match: rounds joined by `;`, the two actions of a round
//! (own first) joined by `,`.

use game_logic::MoveHistory;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

pub fn write_histories(
    histories: &BTreeMap<String, BTreeMap<String, Vec<MoveHistory>>>,
    root: &Path,
) -> io::Result<()> {
    for (strategy, opponents) in histories {
        let folder = root.join(strategy);
        fs::create_dir_all(&folder)?;

        for (opponent, matches) in opponents {
            let mut contents = String::new();
            for history in matches {
                let rounds: Vec<String> = history
                    .iter()
                    .map(|(own, theirs)| format!("{own},{theirs}"))
                    .collect();
                contents.push_str(&rounds.join(";"));
                contents.push('\n');
            }
            fs::write(folder.join(format!("{opponent}.csv")), contents)?;
        }
    }
    Ok(())
}
