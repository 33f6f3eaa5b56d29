//! Fixed reference lists of activity names.
//!
//! Every activity-keyed map in both output files draws its keys from these two
//! lists, so the front end's filter bubbles line up with the generated data.

pub const RAIDS: [&str; 16] = [
    "The Desert Perpetual (Epic)",
    "The Desert Perpetual",
    "Salvation's Edge",
    "Crota's End",
    "Root of Nightmares",
    "King's Fall",
    "Vow of the Disciple",
    "Vault of Glass",
    "Deep Stone Crypt",
    "Garden of Salvation",
    "Last Wish",
    "Crown of Sorrow",
    "Scourge of the Past",
    "Spire of Stars",
    "Eater of Worlds",
    "Leviathan",
];

pub const DUNGEONS: [&str; 15] = [
    "Equilibrium",
    "Sundered Doctrine",
    "Vesper's Host",
    "Warlord's Ruin",
    "Ghosts of the Deep",
    "Spire of the Watcher",
    "Duality",
    "Grasp of Avarice",
    "Prophecy",
    "Pit of Heresy",
    "Shattered Throne",
    "Presage",
    "Harbinger",
    "Zero Hour",
    "The Whisper",
];
