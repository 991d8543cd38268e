#![doc = r##"
talegen — turns an exported list of audio files into tale playlists.

The input is a JSON document with a `sounds` array. Every entry carries an
`id` and the `originalName` of the uploaded file. Files named
`<name>_<ordinal>.<ext>` are grouped by `<name>`, ordered by `<ordinal>`, and
written as a YAML-style list that the tales skill loads as its catalogue.

Quick start
-----------
```rust,no_run
use std::path::Path;

fn main() -> talegen::Result<()> {
    let mut out = std::io::stdout();
    let report = talegen::convert_file_to_writer(Path::new("sounds.json"), &mut out)?;
    eprintln!("{} tales from {} sounds", report.tales, report.records);
    Ok(())
}
```

In-memory conversion
--------------------
```rust
let grouping = talegen::convert_str(r#"{"sounds": [
    {"id": "B", "originalName": "foo_2.wav"},
    {"id": "A", "originalName": "foo_1.wav"}
]}"#).unwrap();

assert_eq!(grouping.tales[0].name, "foo");
assert_eq!(grouping.tales[0].parts, vec!["A", "B"]);
assert_eq!(grouping.tales[0].length(), 240);
```

Error handling
--------------
Only three conditions are fatal: the input cannot be opened, it is not an
object with a `sounds` array, or the output cannot be written. Entries that
do not follow the naming convention are skipped and listed in
[`Grouping::skipped`].

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — filename parsing and grouping.
- [`io`] — JSON reader and playlist writer.
- [`types`] — `SoundRecord`, `Tale`, `TaleType`.
- [`error`] — crate-level `Error` and `Result`.
"##]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::grouping::{Grouping, Skipped};
pub use crate::core::naming::SkipReason;
pub use error::{Error, Result};
pub use types::{PART_LENGTH_SECONDS, SoundRecord, Tale, TalePart, TaleType};

// High-level API re-exports
pub use api::{
    ConversionReport, convert_file, convert_file_to_writer, convert_str, load_tales,
    write_grouping,
};
