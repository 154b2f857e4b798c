use anyhow::{Context, Result};

use courseview::types::MAIN_SESSION;
use courseview_fetch::source_for;

use crate::app::{Browser, SelectOptions};

pub async fn run(site: &str) -> Result<()> {
    let mut browser = Browser::init(source_for(site))
        .await
        .with_context(|| format!("사이트를 열 수 없습니다: {site}"))?;

    browser
        .select_session(MAIN_SESSION, SelectOptions::default())
        .await;
    println!("{}", browser.viewer().content);
    Ok(())
}
