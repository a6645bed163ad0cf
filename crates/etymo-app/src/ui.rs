use kanal::AsyncReceiver;

use etymo_core::view;
use etymo_types::{RegionSet, UiEvent};

/// Terminal front-end: holds the current output regions and redraws
/// on every render event; example sections append without a full
/// redraw, like the page they replace.
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<UiEvent>) -> anyhow::Result<()> {
    let mut regions = RegionSet::default();

    loop {
        let event = app_to_ui_rx.recv().await?;
        match event {
            UiEvent::WordCount(count) => {
                println!("词库收录 {} 个单词", count);
            }
            UiEvent::Render(next) => {
                regions = next;
                print_regions(&regions);
            }
            UiEvent::ExampleSection { part, examples } => {
                let before = regions.affix_examples.len();
                view::append_example_section(&mut regions, &part, &examples);
                for section in &regions.affix_examples[before..] {
                    println!("  {}", section);
                }
            }
            UiEvent::ExamplesDone => {
                let before = regions.affix_examples.len();
                view::finish_example_sections(&mut regions);
                for section in &regions.affix_examples[before..] {
                    println!("  {}", section);
                }
            }
            UiEvent::Suggestions(words) => {
                println!("建议: {}", words.join(", "));
            }
            UiEvent::HideSuggestions => {}
        }
    }
}

pub fn print_regions(regions: &RegionSet) {
    println!();
    println!("翻译: {}", regions.translation);
    if !regions.phonetic.is_empty() {
        println!("音标: {}", regions.phonetic);
    }
    if !regions.word_class.is_empty() {
        println!("词性: {}", regions.word_class);
    }
    if !regions.meanings.is_empty() {
        println!("释义:");
        for (i, meaning) in regions.meanings.iter().enumerate() {
            println!("  {}. {}", i + 1, meaning);
        }
    }
    println!("词根词缀分析:");
    for block in &regions.affix_analysis {
        println!("  {}", block);
    }
    println!("同词缀单词:");
    for section in &regions.affix_examples {
        println!("  {}", section);
    }
    println!("单词辨析:");
    for block in &regions.comparisons {
        println!("  {}", block);
    }
}
