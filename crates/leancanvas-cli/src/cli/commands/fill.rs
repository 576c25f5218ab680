use anyhow::Context;
use dialoguer::{theme::ColorfulTheme, Confirm, Editor, Input, Select};
use leancanvas_core::report::{
    format_about, format_canvas, format_outcome, SPINNER_TEXT, TITLE,
};
use leancanvas_core::{CanvasInput, CanvasSection, FeedbackRequester};
use std::path::PathBuf;

use super::session::FormSession;
use crate::cli::args::FillArgs;
use crate::exit_codes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    EditSection,
    EditAll,
    RequestFeedback,
    ShowCanvas,
    ShowLastResult,
    Save,
    About,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 8] = [
        MenuAction::EditSection,
        MenuAction::EditAll,
        MenuAction::RequestFeedback,
        MenuAction::ShowCanvas,
        MenuAction::ShowLastResult,
        MenuAction::Save,
        MenuAction::About,
        MenuAction::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::EditSection => "✏️  섹션 편집",
            Self::EditAll => "📝 전체 섹션 차례로 입력",
            Self::RequestFeedback => "💡 AI 피드백 받기",
            Self::ShowCanvas => "📌 현재 캔버스 보기",
            Self::ShowLastResult => "🔍 마지막 결과 다시 보기",
            Self::Save => "💾 캔버스 저장",
            Self::About => "ℹ️  서비스 소개",
            Self::Quit => "종료",
        }
    }
}

pub async fn run(args: FillArgs) -> anyhow::Result<i32> {
    let canvas = match &args.canvas {
        Some(path) => CanvasInput::load(path)?,
        None => CanvasInput::default(),
    };

    let config = args.endpoint.to_config();
    let requester = match FeedbackRequester::new(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {}", e);
            return Ok(e.exit_code());
        }
    };

    eprintln!("{}", TITLE);
    eprintln!("─────────────────────────────────────");
    eprintln!("Endpoint: {}", config.endpoint);
    eprintln!("Model:    {}", config.model);
    eprintln!("Log:      {}", config.log_path.display());
    eprintln!();

    let theme = ColorfulTheme::default();
    let mut session = FormSession::new(canvas, requester);
    let mut save_path = args.canvas.clone();

    loop {
        tracing::debug!(
            state = ?session.state(),
            attempts = session.attempts(),
            "awaiting menu choice"
        );
        let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("무엇을 할까요?")
            .items(&labels)
            .default(0)
            .interact_opt()
            .context("interactive session needs a terminal (use `leancanvas submit` otherwise)")?;

        let action = match choice.and_then(|i| MenuAction::ALL.get(i).copied()) {
            Some(a) => a,
            None => MenuAction::Quit,
        };

        match action {
            MenuAction::EditSection => {
                let section_labels: Vec<String> =
                    CanvasSection::ALL.iter().map(|s| s.label()).collect();
                let picked = Select::with_theme(&theme)
                    .with_prompt("편집할 섹션")
                    .items(&section_labels)
                    .default(0)
                    .interact_opt()?;
                if let Some(section) = picked.and_then(|i| CanvasSection::ALL.get(i).copied()) {
                    edit_section(&theme, &mut session, section, args.editor)?;
                }
            }
            MenuAction::EditAll => {
                for section in CanvasSection::ALL {
                    edit_section(&theme, &mut session, section, args.editor)?;
                }
            }
            MenuAction::RequestFeedback => {
                eprintln!("{}", SPINNER_TEXT);
                let outcome = session.trigger().await;
                println!();
                print!("{}", format_outcome(outcome));
                println!();
            }
            MenuAction::ShowCanvas => {
                print!("{}", format_canvas(session.canvas()));
                println!();
            }
            MenuAction::ShowLastResult => match session.last_outcome() {
                Some(outcome) => print!("{}", format_outcome(outcome)),
                None => eprintln!("아직 요청한 피드백이 없습니다."),
            },
            MenuAction::Save => {
                let default_path = save_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "lean_canvas.yaml".to_string());
                let path: String = Input::with_theme(&theme)
                    .with_prompt("저장할 파일")
                    .default(default_path)
                    .interact_text()?;
                let path = PathBuf::from(path);
                if path.exists()
                    && save_path.as_ref() != Some(&path)
                    && !Confirm::with_theme(&theme)
                        .with_prompt(format!("{} 파일을 덮어쓸까요?", path.display()))
                        .default(false)
                        .interact()
                        .unwrap_or(false)
                {
                    continue;
                }
                session.canvas().save(&path)?;
                eprintln!("Saved {}", path.display());
                save_path = Some(path);
            }
            MenuAction::About => print!("{}", format_about()),
            MenuAction::Quit => break,
        }
    }

    Ok(exit_codes::OK)
}

fn edit_section(
    theme: &ColorfulTheme,
    session: &mut FormSession,
    section: CanvasSection,
    use_editor: bool,
) -> anyhow::Result<()> {
    let current = session.canvas().get(section).to_string();
    eprintln!("{}  ({})", section.label(), section.help());

    let value = if use_editor {
        // Closing the editor without saving keeps the current text.
        Editor::new()
            .edit(&current)
            .context("failed to run $EDITOR")?
            .map(|s| s.trim_end_matches('\n').to_string())
            .unwrap_or(current)
    } else {
        Input::<String>::with_theme(theme)
            .with_prompt(section.label())
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?
    };

    session.edit(section, value);
    Ok(())
}
