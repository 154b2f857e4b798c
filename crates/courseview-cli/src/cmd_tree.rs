use anyhow::{Context, Result, bail};

use courseview::types::{MAIN_SESSION, View};
use courseview_fetch::source_for;

use crate::app::{Browser, SelectOptions};

pub async fn run(site: &str, session_id: &str, view: Option<&str>, html: bool) -> Result<()> {
    let mut browser = Browser::init(source_for(site))
        .await
        .with_context(|| format!("사이트를 열 수 없습니다: {site}"))?;

    if browser.manifest().session(session_id).is_none() {
        bail!("manifest에 없는 세션: {session_id}");
    }
    if session_id == MAIN_SESSION {
        bail!("{MAIN_SESSION} 세션에는 트리가 없습니다");
    }

    browser
        .select_session(
            session_id,
            SelectOptions {
                skip_readme: true,
                ..SelectOptions::default()
            },
        )
        .await;

    let view = match view {
        Some(raw) => match View::parse(raw) {
            Some(view) => view,
            None => bail!("알 수 없는 view: {raw} (docs 또는 code)"),
        },
        None => browser.store().current_view,
    };

    let plan = match view {
        View::Docs => browser.docs_plan(),
        View::Code => browser.code_plan(),
    };
    if html {
        println!("{}", plan.to_html());
    } else {
        println!("{}", plan.to_text());
    }
    Ok(())
}
