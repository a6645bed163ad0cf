use etymo_types::{AffixNote, RegionSet, SimilarWord, ViewState, WordRecord};

// Interface strings, fixed language
pub const LABEL_QUERYING: &str = "查询中...";
pub const LABEL_ANALYZING: &str = "分析中...";
pub const LABEL_FAILED: &str = "查询失败";
pub const MSG_NOT_FOUND: &str = "未找到该单词";
pub const MSG_NETWORK: &str = "网络错误，请稍后重试";
pub const NO_AFFIX_DATA: &str = "暂无词根词缀分析数据";
pub const NO_EXAMPLE_DATA: &str = "暂无同词缀单词数据";
pub const NO_SIMILAR_DATA: &str = "暂无相似词对比数据";
pub const DATA_UNAVAILABLE: &str = "无法获取数据";

/// What can happen to the view. Transitions are total: events that make
/// no sense in the current state leave it untouched.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    Submitted(String),
    Resolved(WordRecord),
    Failed(String),
}

pub fn transition(state: ViewState, event: ViewEvent) -> ViewState {
    match event {
        ViewEvent::Submitted(word) => ViewState::Loading(word),
        ViewEvent::Resolved(record) => match state {
            ViewState::Loading(_) => ViewState::Populated(record),
            other => other,
        },
        ViewEvent::Failed(message) => match state {
            ViewState::Loading(_) => ViewState::Error(message),
            other => other,
        },
    }
}

/// Full render of the output regions for a state. Affix example
/// sections are not part of this pass; they arrive later through
/// [`append_example_section`].
pub fn render(state: &ViewState) -> RegionSet {
    match state {
        ViewState::Idle => RegionSet::default(),
        ViewState::Loading(_) => RegionSet {
            translation: LABEL_QUERYING.to_string(),
            affix_analysis: vec![LABEL_ANALYZING.to_string()],
            affix_examples: vec![LABEL_QUERYING.to_string()],
            comparisons: vec![LABEL_QUERYING.to_string()],
            ..RegionSet::default()
        },
        ViewState::Populated(record) => RegionSet {
            translation: record.translation.clone(),
            phonetic: record.phonetic.clone().unwrap_or_default(),
            word_class: record.word_class.clone(),
            meanings: record.meanings.clone(),
            affix_analysis: if record.affix_analysis.is_empty() {
                vec![NO_AFFIX_DATA.to_string()]
            } else {
                record.affix_analysis.iter().map(affix_block).collect()
            },
            affix_examples: if record.affix_analysis.is_empty() {
                vec![NO_EXAMPLE_DATA.to_string()]
            } else {
                Vec::new()
            },
            comparisons: if record.similar_words.is_empty() {
                vec![NO_SIMILAR_DATA.to_string()]
            } else {
                record.similar_words.iter().map(comparison_block).collect()
            },
        },
        ViewState::Error(message) => RegionSet {
            translation: LABEL_FAILED.to_string(),
            affix_analysis: vec![message.clone()],
            affix_examples: vec![DATA_UNAVAILABLE.to_string()],
            comparisons: vec![DATA_UNAVAILABLE.to_string()],
            ..RegionSet::default()
        },
    }
}

/// Append one resolved example section. Sections with zero examples
/// are omitted rather than rendered empty.
pub fn append_example_section(regions: &mut RegionSet, part: &str, examples: &[String]) {
    if examples.is_empty() {
        return;
    }
    regions
        .affix_examples
        .push(format!("含有 \"{}\" 的单词: {}", part, examples.join(", ")));
}

/// Called after every per-affix fetch has resolved; a region left with
/// no sections gets the no-data placeholder.
pub fn finish_example_sections(regions: &mut RegionSet) {
    if regions.affix_examples.is_empty() {
        regions.affix_examples.push(NO_EXAMPLE_DATA.to_string());
    }
}

fn affix_block(note: &AffixNote) -> String {
    format!("{}: {} (含义: {})", note.kind.as_str(), note.part, note.meaning)
}

fn comparison_block(similar: &SimilarWord) -> String {
    format!(
        "{} - {}: {}",
        similar.word, similar.translation, similar.difference
    )
}
