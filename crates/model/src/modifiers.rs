// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Declaration modifier bitmask.
//!
//! Bit values follow the JVM access flags so that documents produced by
//! reflection-based generators can be consumed unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

/// Modifier bitmask for a type or member
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifiers(u32);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const PUBLIC: Modifiers = Modifiers(0x0001);
    pub const PRIVATE: Modifiers = Modifiers(0x0002);
    pub const PROTECTED: Modifiers = Modifiers(0x0004);
    pub const STATIC: Modifiers = Modifiers(0x0008);
    pub const FINAL: Modifiers = Modifiers(0x0010);
    pub const INTERFACE: Modifiers = Modifiers(0x0200);
    pub const ABSTRACT: Modifiers = Modifiers(0x0400);

    /// Flags that take part in verification. Everything else is ignored.
    pub const CHECKED: Modifiers = Modifiers(0x0001 | 0x0002 | 0x0004 | 0x0008 | 0x0010 | 0x0200 | 0x0400);

    /// Flags in the order they are reported, interface and abstract excluded
    const SIMPLE: [(Modifiers, &'static str); 5] = [
        (Modifiers::STATIC, "static"),
        (Modifiers::PUBLIC, "public"),
        (Modifiers::PROTECTED, "protected"),
        (Modifiers::PRIVATE, "private"),
        (Modifiers::FINAL, "final"),
    ];

    /// Create from raw bits
    pub const fn from_bits(bits: u32) -> Self {
        Modifiers(bits)
    }

    /// Raw bits
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check whether every flag in `other` is set
    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    /// Only the flags that take part in verification
    pub const fn checked(self) -> Modifiers {
        Modifiers(self.0 & Self::CHECKED.0)
    }

    /// Exact equality on the checked flag set
    pub fn matches(self, actual: Modifiers) -> bool {
        self.checked() == actual.checked()
    }

    pub fn is_public(self) -> bool {
        self.contains(Modifiers::PUBLIC)
    }

    pub fn is_static(self) -> bool {
        self.contains(Modifiers::STATIC)
    }

    pub fn is_interface(self) -> bool {
        self.contains(Modifiers::INTERFACE)
    }

    pub fn is_abstract(self) -> bool {
        self.contains(Modifiers::ABSTRACT)
    }

    /// Describe how `actual` has to change to match `self`.
    ///
    /// Each differing flag yields one sentence with its required polarity.
    /// Interfaces are implicitly abstract, so an interface mismatch is
    /// reported in place of an abstract mismatch.
    pub fn describe_difference(self, actual: Modifiers) -> String {
        let mut sentences = Vec::new();

        for (flag, name) in Self::SIMPLE {
            if self.contains(flag) != actual.contains(flag) {
                sentences.push(polarity(actual.contains(flag), name));
            }
        }

        if self.is_interface() != actual.is_interface() {
            sentences.push(polarity(actual.is_interface(), "an interface"));
        } else if self.is_abstract() != actual.is_abstract() {
            sentences.push(polarity(actual.is_abstract(), "abstract"));
        }

        sentences.join(" ")
    }
}

fn polarity(actually_set: bool, name: &str) -> String {
    if actually_set {
        format!("It should not be {}.", name)
    } else {
        format!("It should be {}.", name)
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

impl fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modifiers({:#06x})", self.0)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.contains(Modifiers::PUBLIC) {
            names.push("public");
        }
        if self.contains(Modifiers::PROTECTED) {
            names.push("protected");
        }
        if self.contains(Modifiers::PRIVATE) {
            names.push("private");
        }
        if self.is_abstract() && !self.is_interface() {
            names.push("abstract");
        }
        if self.is_static() {
            names.push("static");
        }
        if self.contains(Modifiers::FINAL) {
            names.push("final");
        }
        if self.is_interface() {
            names.push("interface");
        }
        write!(f, "{}", names.join(" "))
    }
}

#[cfg(test)]
#[path = "modifiers_tests.rs"]
mod tests;
