//! SQL side of paginated listings
//!
//! A [`ListingQuery`] always excludes soft-deleted rows. Predicates come in
//! two tiers: *scope* predicates bound every query (rows, total and the
//! auxiliary counts), while *filters* and the search term only narrow the
//! returned rows and `total_count`.

use catalog_core::{ListingCounts, Page, PageRequest, TriState};
use sqlx::postgres::{PgPool, PgRow};
use sqlx::{FromRow, Postgres, QueryBuilder};

/// One `AND`-ed condition of a listing query
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `column = value`
    Bool(&'static str, bool),
    IsNull(&'static str),
    NotNull(&'static str),
    /// `column = ANY(ids)`
    AnyOf(&'static str, Vec<i64>),
    /// Static SQL fragment, parenthesized when pushed
    Raw(&'static str),
}

impl Predicate {
    /// Pin a boolean column, or nothing for [`TriState::Any`]
    pub fn flag(column: &'static str, state: TriState) -> Option<Self> {
        state.as_bool().map(|value| Self::Bool(column, value))
    }

    /// Presence of a nullable column: `Yes` is NOT NULL, `No` is NULL
    pub fn presence(column: &'static str, state: TriState) -> Option<Self> {
        match state {
            TriState::Yes => Some(Self::NotNull(column)),
            TriState::No => Some(Self::IsNull(column)),
            TriState::Any => None,
        }
    }

    /// Id-set membership; an empty set adds no condition
    pub fn any_of(column: &'static str, ids: &[i64]) -> Option<Self> {
        (!ids.is_empty()).then(|| Self::AnyOf(column, ids.to_vec()))
    }

    fn push_to(&self, qb: &mut QueryBuilder<'static, Postgres>) {
        match self {
            Self::Bool(column, value) => {
                qb.push(*column).push(" = ").push_bind(*value);
            }
            Self::IsNull(column) => {
                qb.push(*column).push(" IS NULL");
            }
            Self::NotNull(column) => {
                qb.push(*column).push(" IS NOT NULL");
            }
            Self::AnyOf(column, ids) => {
                qb.push(*column).push(" = ANY(").push_bind(ids.clone()).push(")");
            }
            Self::Raw(sql) => {
                qb.push("(").push(*sql).push(")");
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reach {
    /// Scope predicates only
    Scope,
    /// Scope and search
    Searched,
    /// Scope, search and filters
    Filtered,
}

/// Builder for a paginated `SELECT` over one table
#[derive(Debug, Clone)]
pub struct ListingQuery {
    table: &'static str,
    columns: &'static str,
    order_by: &'static str,
    search_columns: &'static [&'static str],
    search: Option<String>,
    scope: Vec<Predicate>,
    filters: Vec<Predicate>,
    splits_follow_search: bool,
}

impl ListingQuery {
    pub fn new(table: &'static str, columns: &'static str) -> Self {
        Self {
            table,
            columns,
            order_by: "id DESC",
            search_columns: &[],
            search: None,
            scope: Vec::new(),
            filters: Vec::new(),
            splits_follow_search: false,
        }
    }

    pub fn order_by(mut self, order_by: &'static str) -> Self {
        self.order_by = order_by;
        self
    }

    /// Case-sensitive substring search over `columns`; blank terms are ignored
    pub fn search(mut self, columns: &'static [&'static str], term: Option<&str>) -> Self {
        self.search_columns = columns;
        self.search = term
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        self
    }

    pub fn scope(mut self, predicate: impl Into<Option<Predicate>>) -> Self {
        self.scope.extend(predicate.into());
        self
    }

    pub fn filter(mut self, predicate: impl Into<Option<Predicate>>) -> Self {
        self.filters.extend(predicate.into());
        self
    }

    /// Narrow the `enabled`/`disabled` counts by the search term as well as the scope
    pub fn splits_follow_search(mut self, follow: bool) -> Self {
        self.splits_follow_search = follow;
        self
    }

    fn push_where(
        &self,
        qb: &mut QueryBuilder<'static, Postgres>,
        reach: Reach,
        extra: Option<&Predicate>,
    ) {
        qb.push(" WHERE deleted_at IS NULL");

        for predicate in &self.scope {
            qb.push(" AND ");
            predicate.push_to(qb);
        }

        if reach != Reach::Scope {
            if let Some(term) = self.search.as_ref().filter(|_| !self.search_columns.is_empty()) {
                qb.push(" AND (");
                for (i, column) in self.search_columns.iter().enumerate() {
                    if i > 0 {
                        qb.push(" OR ");
                    }
                    qb.push("position(")
                        .push_bind(term.clone())
                        .push(" in ")
                        .push(*column)
                        .push(") > 0");
                }
                qb.push(")");
            }
        }

        if reach == Reach::Filtered {
            for predicate in &self.filters {
                qb.push(" AND ");
                predicate.push_to(qb);
            }
        }

        if let Some(predicate) = extra {
            qb.push(" AND ");
            predicate.push_to(qb);
        }
    }

    fn build_select(&self, page: PageRequest) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(format!("SELECT {} FROM {}", self.columns, self.table));
        self.push_where(&mut qb, Reach::Filtered, None);
        qb.push(" ORDER BY ").push(self.order_by);
        if let Some((limit, skip)) = page.window() {
            qb.push(" LIMIT ").push_bind(limit).push(" OFFSET ").push_bind(skip);
        }
        qb
    }

    fn build_count(&self, reach: Reach, extra: Option<&Predicate>) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", self.table));
        self.push_where(&mut qb, reach, extra);
        qb
    }

    /// Rows of the requested page
    pub async fn fetch<M>(&self, pool: &PgPool, page: PageRequest) -> Result<Vec<M>, sqlx::Error>
    where
        M: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut qb = self.build_select(page);
        qb.build_query_as::<M>().fetch_all(pool).await
    }

    /// Rows matching scope, search and filters, ignoring pagination
    pub async fn total(&self, pool: &PgPool) -> Result<i64, sqlx::Error> {
        let mut qb = self.build_count(Reach::Filtered, None);
        qb.build_query_scalar::<i64>().fetch_one(pool).await
    }

    /// Rows in scope, optionally narrowed by one extra predicate
    pub async fn scope_count(
        &self,
        pool: &PgPool,
        extra: Option<&Predicate>,
    ) -> Result<i64, sqlx::Error> {
        self.count_at(pool, Reach::Scope, extra).await
    }

    async fn count_at(
        &self,
        pool: &PgPool,
        reach: Reach,
        extra: Option<&Predicate>,
    ) -> Result<i64, sqlx::Error> {
        let mut qb = self.build_count(reach, extra);
        qb.build_query_scalar::<i64>().fetch_one(pool).await
    }

    fn split_reach(&self) -> Reach {
        if self.splits_follow_search {
            Reach::Searched
        } else {
            Reach::Scope
        }
    }

    /// `all`, plus `enabled`/`disabled` splits of `flag_column` when given
    pub async fn counts(
        &self,
        pool: &PgPool,
        flag_column: Option<&'static str>,
    ) -> Result<ListingCounts, sqlx::Error> {
        let mut counts = ListingCounts {
            all: self.scope_count(pool, None).await?,
            ..ListingCounts::default()
        };

        if let Some(column) = flag_column {
            let reach = self.split_reach();
            counts.enabled = Some(
                self.count_at(pool, reach, Some(&Predicate::Bool(column, true)))
                    .await?,
            );
            counts.disabled = Some(
                self.count_at(pool, reach, Some(&Predicate::Bool(column, false)))
                    .await?,
            );
        }

        Ok(counts)
    }

    /// Fetch a page with `total_count` and auxiliary counts filled in
    pub async fn page<M, E>(
        &self,
        pool: &PgPool,
        request: PageRequest,
        flag_column: Option<&'static str>,
    ) -> Result<Page<E>, sqlx::Error>
    where
        M: for<'r> FromRow<'r, PgRow> + Send + Unpin,
        E: From<M>,
    {
        let rows = self.fetch::<M>(pool, request).await?;
        let total = self.total(pool).await?;
        let counts = self.counts(pool, flag_column).await?;

        Ok(Page::new(request, rows.into_iter().map(E::from).collect(), total).with_counts(counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faqs() -> ListingQuery {
        ListingQuery::new("faqs", "id, question")
    }

    #[test]
    fn test_bare_select() {
        let qb = faqs().build_select(PageRequest::default());
        assert_eq!(
            qb.sql(),
            "SELECT id, question FROM faqs WHERE deleted_at IS NULL ORDER BY id DESC LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn test_unbounded_has_no_window() {
        let qb = faqs().build_select(PageRequest::unbounded());
        assert!(!qb.sql().contains("LIMIT"));
        assert!(!qb.sql().contains("OFFSET"));
    }

    #[test]
    fn test_search_and_filters() {
        let query = faqs()
            .search(&["question", "answer"], Some("ship"))
            .filter(Predicate::flag("is_enabled", TriState::Yes));

        assert_eq!(
            query.build_select(PageRequest::new(2, 10).unwrap()).sql(),
            "SELECT id, question FROM faqs WHERE deleted_at IS NULL \
             AND (position($1 in question) > 0 OR position($2 in answer) > 0) \
             AND is_enabled = $3 ORDER BY id DESC LIMIT $4 OFFSET $5"
        );
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let query = faqs().search(&["question"], Some(""));
        assert!(!query.build_select(PageRequest::default()).sql().contains("position"));
    }

    #[test]
    fn test_any_tri_state_adds_nothing() {
        let query = faqs()
            .filter(Predicate::flag("is_enabled", TriState::Any))
            .filter(Predicate::presence("hot_deal_end_at", TriState::Any))
            .filter(Predicate::any_of("category_id", &[]));
        assert_eq!(
            query.build_count(Reach::Filtered, None).sql(),
            "SELECT COUNT(*) FROM faqs WHERE deleted_at IS NULL"
        );
    }

    #[test]
    fn test_scope_count_ignores_filters_and_search() {
        let query = ListingQuery::new("sub_categories", "*")
            .scope(Predicate::any_of("category_id", &[1, 2]))
            .search(&["name"], Some("pho"))
            .filter(Predicate::flag("is_enabled", TriState::No));

        assert_eq!(
            query
                .build_count(Reach::Scope, Some(&Predicate::Bool("is_enabled", true)))
                .sql(),
            "SELECT COUNT(*) FROM sub_categories WHERE deleted_at IS NULL \
             AND category_id = ANY($1) AND is_enabled = $2"
        );
    }

    #[test]
    fn test_splits_can_follow_search() {
        let query = ListingQuery::new("categories", "*")
            .search(&["name"], Some("pho"))
            .filter(Predicate::flag("is_enabled", TriState::No));
        assert_eq!(query.split_reach(), Reach::Scope);

        let query = query.splits_follow_search(true);
        assert_eq!(query.split_reach(), Reach::Searched);
        assert_eq!(
            query
                .build_count(query.split_reach(), Some(&Predicate::Bool("is_enabled", true)))
                .sql(),
            "SELECT COUNT(*) FROM categories WHERE deleted_at IS NULL \
             AND (position($1 in name) > 0) AND is_enabled = $2"
        );
    }

    #[test]
    fn test_presence_and_raw() {
        let query = ListingQuery::new("items", "id")
            .filter(Predicate::presence("hot_deal_end_at", TriState::No))
            .filter(Predicate::Raw("discount_percent > 0"));
        assert_eq!(
            query.build_count(Reach::Filtered, None).sql(),
            "SELECT COUNT(*) FROM items WHERE deleted_at IS NULL \
             AND hot_deal_end_at IS NULL AND (discount_percent > 0)"
        );
    }
}
