use std::collections::HashMap;

use crate::descriptor::{OptionDescriptor, OptionKind};

/// Option descriptors keyed by name, long and short names kept apart.
///
/// Registering a name twice replaces the earlier descriptor.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    long: HashMap<String, OptionDescriptor>,
    short: HashMap<char, OptionDescriptor>,
    // Registration order of (kind, name), for iteration.
    order: Vec<(OptionKind, String)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, descriptor: OptionDescriptor) {
        let key = (descriptor.kind(), descriptor.name().to_string());
        let first = descriptor.name().chars().next();
        let replaced = match (descriptor.kind(), first) {
            (OptionKind::Long, _) => self.long.insert(key.1.clone(), descriptor).is_some(),
            (OptionKind::Short, Some(c)) => self.short.insert(c, descriptor).is_some(),
            (OptionKind::Short, None) => return,
        };
        if !replaced {
            self.order.push(key);
        }
    }

    pub fn register_all<I>(&mut self, descriptors: I)
    where
        I: IntoIterator<Item = OptionDescriptor>,
    {
        for descriptor in descriptors {
            self.register(descriptor);
        }
    }

    pub fn long(&self, name: &str) -> Option<&OptionDescriptor> {
        self.long.get(name)
    }

    pub fn short(&self, c: char) -> Option<&OptionDescriptor> {
        self.short.get(&c)
    }

    pub fn len(&self) -> usize {
        self.long.len() + self.short.len()
    }

    pub fn is_empty(&self) -> bool {
        self.long.is_empty() && self.short.is_empty()
    }

    /// All descriptors in first-registration order, with their latest values.
    pub fn iter(&self) -> impl Iterator<Item = &OptionDescriptor> + '_ {
        self.order.iter().filter_map(|(kind, name)| match kind {
            OptionKind::Long => self.long.get(name),
            OptionKind::Short => name.chars().next().and_then(|c| self.short.get(&c)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ArgumentType;

    #[test]
    fn namespaces_are_separate() {
        let mut reg = Registry::new();
        reg.register(OptionDescriptor::long("x"));
        reg.register(OptionDescriptor::short('x').required());
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.long("x").unwrap().arg_type(), ArgumentType::None);
        assert_eq!(reg.short('x').unwrap().arg_type(), ArgumentType::Required);
    }

    #[test]
    fn last_registration_wins() {
        let mut reg = Registry::new();
        reg.register_all([
            OptionDescriptor::long("out"),
            OptionDescriptor::short('v'),
            OptionDescriptor::long("out").required(),
        ]);
        assert_eq!(reg.len(), 2);
        assert!(reg.long("out").unwrap().takes_arg());
        let names: Vec<String> = reg.iter().map(|d| d.to_string()).collect();
        assert_eq!(names, vec!["--out=", "-v"]);
    }

    #[test]
    fn lookups_miss() {
        let reg = Registry::new();
        assert!(reg.is_empty());
        assert!(reg.long("out").is_none());
        assert!(reg.short('o').is_none());
        assert_eq!(reg.iter().count(), 0);
    }
}
