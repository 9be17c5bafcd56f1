/// Extension tag of an artifact name: the text after the last `.`.
///
/// Only the presence of a dot matters, not its position, so a dotfile keeps its tail
/// (`.gitignore` -> `gitignore`) and a trailing dot yields an empty tag.
pub fn resolve(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/extension.rs"]
mod tests;
