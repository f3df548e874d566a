//! Split a list of participants into random teams.
//!
//! The draw is [`teams::generate_teams`]: optional per team gender quotas are
//! filled first, then everyone left over is dealt round-robin. With skill
//! balancing every skill tier is spread over the teams on its own
//! ([`distribute::distribute_by_skill`]). All randomness comes from the
//! [`rand::Rng`] passed in, so a seeded generator reproduces a draw.
//!
//! [`format::format_teams_for_clipboard`] renders the result as text ready to
//! paste. The remaining modules are the bookkeeping around a draw: the
//! participant list, the saved settings and templates, and where they are
//! stored.
//!
//! ## Feature Flags
//!
//! * bench - enable the criterion benchmarks

// This file is part of team-randomizer.
//
// team-randomizer is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// team-randomizer is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

#![deny(clippy::panic)]

pub mod distribute;
pub mod format;
pub mod gender;
pub mod participant;
pub mod requirements;
pub mod roster;
pub mod settings;
pub mod shuffle;
pub mod skill;
pub mod storage;
pub mod teams;
pub mod template;
pub mod utils;

pub const HOME: &str = "team-randomizer";
pub const MAX_PARTICIPANTS: usize = 100;
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 50;

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2025-2026 Developers of the team-randomizer project

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2025 Developers of the team-randomizer project
Licensed under the AGPLv3"
);
