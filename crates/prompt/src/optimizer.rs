//! Heuristic prompt optimizer.
//!
//! Rewrites an arbitrary free-text prompt by classifying it into a
//! category, detecting structural gaps (context, objective, format) and
//! appending a fixed clarifying clause per gap, then prepending a
//! persona framing when the category has one.
//!
//! The whole pipeline is an ordered list of pure rules over constant
//! keyword tables: two calls with identical input produce byte-identical
//! output. The keyword sets and thresholds below are the concrete
//! configuration of the heuristics; matching is case-insensitive, on the
//! lowercased input.

use crate::persona::PersonaCatalog;
use crate::types::{Category, Gap, OptimizationResult};
use promptforge_core::{AppError, AppResult};

/// Classification rules, evaluated in priority order: technical,
/// analysis, research, instruction, creative. The first category with a
/// matching keyword wins; no match falls back to creative.
///
/// Single-word entries match any word of the input by prefix (so
/// "analis" covers "analisar" and "analise"); entries containing a
/// space match as a whole phrase.
const CLASSIFICATION_RULES: [(Category, &[&str]); 5] = [
    (
        Category::Technical,
        &[
            "código",
            "codigo",
            "programa",
            "função",
            "funcao",
            "bug",
            "erro",
            "api",
            "algoritmo",
            "software",
            "implementar",
            "depurar",
        ],
    ),
    (
        Category::Analysis,
        &[
            "analis", "anális", "avalie", "avaliar", "compare", "comparar", "dados", "métrica",
            "metrica", "tendência", "tendencia",
        ],
    ),
    (
        Category::Research,
        &[
            "pesquis",
            "investig",
            "estudo",
            "literatura",
            "evidência",
            "evidencia",
            "fontes",
        ],
    ),
    (
        Category::Instruction,
        &[
            "como fazer",
            "passo a passo",
            "ensine",
            "ensinar",
            "tutorial",
            "guia",
            "instruç",
            "instruc",
        ],
    ),
    (
        Category::Creative,
        &[
            "crie", "criar", "invente", "inventar", "história", "historia", "poema", "imagine",
            "escreva", "escrever",
        ],
    ),
];

/// Goal-indicating keywords; absence of all of them flags an objective gap.
const OBJECTIVE_KEYWORDS: [&str; 8] = [
    "objetivo",
    "quero",
    "preciso",
    "meta",
    "finalidade",
    "gostaria",
    "para que",
    "a fim de",
];

/// Output-shape keywords; absence of all of them flags a format gap.
const FORMAT_KEYWORDS: [&str; 13] = [
    "lista",
    "tabela",
    "tópicos",
    "topicos",
    "passos",
    "formato",
    "resumo",
    "parágrafos",
    "paragrafos",
    "planilha",
    "json",
    "markdown",
    "bullet",
];

/// A prompt whose single sentence has fewer words than this is judged
/// to lack context.
const CONTEXT_MIN_WORDS: usize = 6;

/// Fixed clarifying clause per gap kind, appended in the order context,
/// objective, format.
const CONTEXT_CLAUSE: &str = "Considere o contexto atual e as melhores práticas da área.";
const OBJECTIVE_CLAUSE: &str = "O objetivo é obter uma resposta clara, precisa e útil.";
const FORMAT_CLAUSE: &str =
    "Apresente a resposta em texto estruturado, com os pontos principais destacados.";

/// Optimize a raw prompt.
///
/// Fails with `EmptyPrompt` when the input is empty after trimming.
/// Otherwise returns the rewritten text, the classified category, the
/// ordered gap list and the persona applied (if any).
///
/// # Example
/// ```
/// use promptforge_prompt::optimizer::optimize;
///
/// let result = optimize("Me dê ideias para um aplicativo mobile.").unwrap();
/// assert!(result.text.starts_with("Me dê ideias"));
/// assert!(result.persona.is_none());
/// ```
pub fn optimize(raw_prompt: &str) -> AppResult<OptimizationResult> {
    let trimmed = raw_prompt.trim();
    if trimmed.is_empty() {
        return Err(AppError::EmptyPrompt);
    }

    let lower = trimmed.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let (category, hint) = classify(&lower, &words);
    let gaps = detect_gaps(trimmed, &lower, &words);

    tracing::debug!(
        "Classified as '{}' (hint: {:?}), gaps: {:?}",
        category,
        hint,
        gaps
    );

    // Append one clarifying clause per gap. The clause order is a
    // contract: context, then objective, then format.
    let mut body = trimmed.to_string();
    let clauses: Vec<&str> = gaps
        .iter()
        .map(|gap| match gap {
            Gap::Context => CONTEXT_CLAUSE,
            Gap::Objective => OBJECTIVE_CLAUSE,
            Gap::Format => FORMAT_CLAUSE,
        })
        .collect();
    if !clauses.is_empty() {
        body.push_str("\n\n");
        body.push_str(&clauses.join(" "));
    }

    // Persona framing always precedes the body.
    let personas = PersonaCatalog::new().suggest(category, hint);
    let persona = personas.first().map(|p| p.to_string());
    let text = match &persona {
        Some(p) => format!("Atue como {}. {}", p, body),
        None => body,
    };

    Ok(OptimizationResult {
        text,
        category,
        gaps,
        persona,
    })
}

/// Classify the prompt into a category.
///
/// Returns the winning category and the keyword that decided it (used
/// as a domain hint for persona lookup). Ties between categories are
/// broken by the fixed rule order; within a category, by keyword order.
fn classify(lower: &str, words: &[&str]) -> (Category, Option<&'static str>) {
    for (category, keywords) in CLASSIFICATION_RULES {
        for keyword in keywords {
            if matches_keyword(lower, words, keyword) {
                return (category, Some(keyword));
            }
        }
    }

    // No strong signal: fall back to creative.
    (Category::Creative, None)
}

/// Detect structural gaps, in the fixed order context, objective, format.
fn detect_gaps(trimmed: &str, lower: &str, words: &[&str]) -> Vec<Gap> {
    let mut gaps = Vec::new();

    if lacks_context(trimmed, words) {
        gaps.push(Gap::Context);
    }

    if !OBJECTIVE_KEYWORDS
        .iter()
        .any(|k| matches_keyword(lower, words, k))
    {
        gaps.push(Gap::Objective);
    }

    if !FORMAT_KEYWORDS
        .iter()
        .any(|k| matches_keyword(lower, words, k))
    {
        gaps.push(Gap::Format);
    }

    gaps
}

/// Context is judged missing when the prompt is a single short clause:
/// no sentence beyond the first, and fewer than `CONTEXT_MIN_WORDS`
/// words overall.
fn lacks_context(trimmed: &str, words: &[&str]) -> bool {
    let sentences = trimmed
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();

    sentences <= 1 && words.len() < CONTEXT_MIN_WORDS
}

/// Keyword matching: phrases (containing a space) match as substrings of
/// the lowercased text; single words match any input word by prefix.
fn matches_keyword(lower: &str, words: &[&str], keyword: &str) -> bool {
    if keyword.contains(' ') {
        lower.contains(keyword)
    } else {
        words.iter().any(|w| w.starts_with(keyword))
    }
}
