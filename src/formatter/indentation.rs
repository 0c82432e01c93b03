//! Indentation stack driven by clause keywords and parentheses.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndentKind {
    TopLevel,
    BlockLevel,
}

/// Stack of indent levels. The rendered indent is the unit repeated once per
/// stacked level.
#[derive(Debug, Clone)]
pub struct Indentation {
    unit: String,
    stack: Vec<IndentKind>,
}

impl Indentation {
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            stack: Vec::new(),
        }
    }

    /// Current indent string.
    pub fn indent(&self) -> String {
        self.unit.repeat(self.stack.len())
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn increase_top_level(&mut self) {
        self.stack.push(IndentKind::TopLevel);
    }

    pub fn increase_block_level(&mut self) {
        self.stack.push(IndentKind::BlockLevel);
    }

    /// Pops the innermost level only when it was opened by a clause keyword.
    pub fn decrease_top_level(&mut self) {
        if self.stack.last() == Some(&IndentKind::TopLevel) {
            self.stack.pop();
        }
    }

    /// Pops up to and including the innermost block level, closing every
    /// clause level opened inside it.
    pub fn decrease_block_level(&mut self) {
        while let Some(kind) = self.stack.pop() {
            if kind == IndentKind::BlockLevel {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_repeats_unit_per_level() {
        let mut ind = Indentation::new("  ");
        assert_eq!(ind.indent(), "");
        ind.increase_top_level();
        ind.increase_block_level();
        assert_eq!(ind.indent(), "    ");
        assert_eq!(ind.depth(), 2);
    }

    #[test]
    fn decrease_top_level_ignores_block_levels() {
        let mut ind = Indentation::new("\t");
        ind.increase_block_level();
        ind.decrease_top_level();
        assert_eq!(ind.depth(), 1);
        ind.increase_top_level();
        ind.decrease_top_level();
        assert_eq!(ind.depth(), 1);
    }

    #[test]
    fn decrease_block_level_closes_nested_clauses() {
        let mut ind = Indentation::new("  ");
        ind.increase_top_level();
        ind.increase_block_level();
        ind.increase_top_level();
        ind.increase_top_level();
        ind.decrease_block_level();
        assert_eq!(ind.depth(), 1);
        assert_eq!(ind.indent(), "  ");
    }

    #[test]
    fn unbalanced_decrease_is_a_no_op() {
        let mut ind = Indentation::new("  ");
        ind.decrease_block_level();
        ind.decrease_top_level();
        assert_eq!(ind.depth(), 0);
        ind.increase_top_level();
        ind.decrease_block_level();
        assert_eq!(ind.depth(), 0);
    }
}
