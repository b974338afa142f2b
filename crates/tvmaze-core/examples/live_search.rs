use tvmaze_core::{ShowWidget, TvMazeApi, UiEvent};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let term = std::env::args().nth(1).unwrap_or_else(|| "Lost".to_string());
    let widget = ShowWidget::new(TvMazeApi::new()?);

    println!("Searching for '{}'...\n", term);
    widget.handle(UiEvent::SearchSubmitted { term }).await?;

    let snapshot = widget.snapshot().await;
    println!("Found {} shows: {:?}", snapshot.show_ids.len(), snapshot.show_ids);

    if let Some(&show_id) = snapshot.show_ids.first() {
        println!("\nEpisodes of show {}:\n", show_id);
        widget.activate_episodes(0).await?;

        let entries = widget.with_view_ref(|view| view.episodes.entry_texts()).await;
        for entry in entries.iter().take(10) {
            println!("  {}", entry);
        }
        println!("\n{} episodes in total.", entries.len());
    }

    Ok(())
}
