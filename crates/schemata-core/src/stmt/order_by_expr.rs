use super::ColumnRef;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub column: ColumnRef,

    pub order: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl OrderByExpr {
    pub fn asc(column: ColumnRef) -> Self {
        Self {
            column,
            order: Direction::Asc,
        }
    }

    pub fn desc(column: ColumnRef) -> Self {
        Self {
            column,
            order: Direction::Desc,
        }
    }
}
