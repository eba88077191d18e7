//! Playable class and spec names, and the file slugs derived from them.

use phf::phf_ordered_map;

/// Specs of every class, in display order.
pub static SPECS_BY_CLASS: phf::OrderedMap<&'static str, &'static [&'static str]> = phf_ordered_map! {
    "Death Knight" => &["Blood", "Frost", "Unholy"],
    "Demon Hunter" => &["Havoc", "Vengeance"],
    "Druid" => &["Balance", "Feral", "Guardian", "Restoration"],
    "Evoker" => &["Augmentation", "Devastation", "Preservation"],
    "Hunter" => &["Beast Mastery", "Marksmanship", "Survival"],
    "Mage" => &["Arcane", "Fire", "Frost"],
    "Monk" => &["Brewmaster", "Mistweaver", "Windwalker"],
    "Paladin" => &["Holy", "Protection", "Retribution"],
    "Priest" => &["Discipline", "Holy", "Shadow"],
    "Rogue" => &["Assassination", "Outlaw", "Subtlety"],
    "Shaman" => &["Elemental", "Enhancement", "Restoration"],
    "Warlock" => &["Affliction", "Demonology", "Destruction"],
    "Warrior" => &["Arms", "Fury", "Protection"],
};

pub fn specs(class_name: &str) -> Option<&'static [&'static str]> {
    SPECS_BY_CLASS.get(class_name).copied()
}

pub fn is_known(class_name: &str, spec_name: &str) -> bool {
    specs(class_name).is_some_and(|specs| specs.contains(&spec_name))
}

/// Every `(class, spec)` pair.
pub fn all_specs() -> impl Iterator<Item = (&'static str, &'static str)> {
    SPECS_BY_CLASS
        .entries()
        .flat_map(|(&class_name, specs)| specs.iter().map(move |&spec| (class_name, spec)))
}

/// `"Death Knight"` -> `"death-knight"`.
pub fn class_slug(class_name: &str) -> String {
    class_name.to_lowercase().replace(' ', "-")
}

/// File stem for a class/spec pair: `"Hunter", "Beast Mastery"` ->
/// `"hunter-beast-mastery"`.
pub fn slug(class_name: &str, spec_name: &str) -> String {
    format!("{}-{}", class_name, spec_name).to_lowercase().replace(' ', "-")
}
