//! Queries against the `characters` table.

use crate::{eq, query, schema::characters as c};
use diesel::{pg::Pg, prelude::*};
use swjz_core::{character, Character, CharacterSummary, SearchQuery};

/// Returns the requested page of characters matching the search and the number of matches
/// on all pages.
pub fn search(
    conn: &mut PgConnection,
    query: &SearchQuery,
) -> eyre::Result<(Vec<CharacterSummary>, i64)> {
    tracing::debug!("Searching characters with {query:?}");

    let total = filtered(query).count().get_result::<i64>(conn)?;
    let characters = page(query)
        .select(SummaryRow::as_select())
        .load(conn)?
        .into_iter()
        .map(CharacterSummary::from)
        .collect::<Vec<_>>();

    tracing::debug!("Found {total} characters, {} on page", characters.len());
    Ok((characters, total))
}

/// Returns the character with the given id, if any.
pub fn find(conn: &mut PgConnection, id: i32) -> eyre::Result<Option<Character>> {
    let character = c::table
        .filter(eq!(c, id))
        .select(CharacterRow::as_select())
        .first(conn)
        .optional()?;
    Ok(character.map(Character::from))
}

/// Returns the first character with exactly the given headword, if any.
pub fn find_by_wordhead(
    conn: &mut PgConnection,
    wordhead: &str,
) -> eyre::Result<Option<Character>> {
    let character = c::table
        .filter(eq!(c, wordhead))
        .order(c::id.asc())
        .select(CharacterRow::as_select())
        .first(conn)
        .optional()?;
    Ok(character.map(Character::from))
}

// all characters matching the search's filters
fn filtered(query: &SearchQuery) -> c::BoxedQuery<'static, Pg> {
    let mut statement = c::table.into_boxed();
    if let Some(wordhead) = &query.wordhead {
        statement = statement.filter(c::wordhead.ilike(like_pattern(wordhead)));
    }
    if let Some(pinyin) = &query.pinyin {
        statement = statement.filter(c::pinyin.ilike(like_pattern(pinyin)));
    }
    if let Some(radical) = &query.radical {
        statement = statement.filter(c::radical.eq(radical.clone()));
    }
    statement
}

// the requested page of the matches, ordered by id so that pages are stable
fn page(query: &SearchQuery) -> c::BoxedQuery<'static, Pg> {
    filtered(query)
        .order(c::id.asc())
        .limit(query.limit())
        .offset(query.offset())
}

/// Pattern matching any text containing `needle`, with LIKE wildcards in it escaped.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// queries

query! {
    #[derive(Debug)]
    struct SummaryRow {
        id: i32 = characters::id,
        wordhead: String = characters::wordhead,
        pinyin: Option<String> = characters::pinyin,
        radical: Option<String> = characters::radical,
        explanation: Option<String> = characters::explanation,
        hanviet: Option<String> = characters::hanviet,
    }
}

impl From<SummaryRow> for CharacterSummary {
    fn from(row: SummaryRow) -> Self {
        Self {
            id: row.id,
            wordhead: row.wordhead,
            pinyin: row.pinyin,
            radical: row.radical,
            explanation: row.explanation,
            hanviet: row.hanviet,
        }
    }
}

query! {
    #[derive(Debug)]
    struct CharacterRow {
        id: i32 = characters::id,
        wordhead: String = characters::wordhead,
        pinyin: Option<String> = characters::pinyin,
        radical: Option<String> = characters::radical,
        volume: Option<String> = characters::volume,
        explanation: Option<String> = characters::explanation,
        hanviet: Option<String> = characters::hanviet,
        meaning_vi: Option<String> = characters::meaning_vi,
        fanqie: Option<String> = characters::fanqie,
        duan_notes: Option<serde_json::Value> = characters::duan_notes,
        variants: Option<serde_json::Value> = characters::variants,
    }
}

impl From<CharacterRow> for Character {
    fn from(row: CharacterRow) -> Self {
        Self {
            id: row.id,
            wordhead: row.wordhead,
            pinyin: row.pinyin,
            radical: row.radical,
            volume: row.volume,
            fanqie: row.fanqie,
            explanation: row.explanation,
            hanviet: row.hanviet,
            meaning_vi: row.meaning_vi,
            duan_notes: character::duan_notes_from_json(row.duan_notes),
            variants: character::variants_from_json(row.variants),
        }
    }
}
