use crate::browser::{DeleteOutcome, LoadOutcome, LoadRequest, QuestionBrowser};
use crate::cli::Command;
use crate::clients::{TriviaApi, TriviaClient};
use crate::commands::{ReviewCommand, HELP};
use crate::config::Config;
use crate::console::{Console, Event};
use crate::models::{loaders, Category};
use crate::services::{QuestionForm, QuizSession, QUESTIONS_PER_PLAY};
use crate::utils::logging::{self, SessionStats};
use crate::view::{self, NavTarget, QuestionCard};
use anyhow::{Context, Result};
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    client: TriviaClient,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        config.validate().context("配置不合法")?;
        logging::log_startup(&config);

        let client = TriviaClient::new(&config).context("无法创建 HTTP 客户端")?;

        Ok(Self { config, client })
    }

    /// 运行子命令
    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Review => self.run_review().await,
            Command::Add {
                question,
                answer,
                difficulty,
                category,
            } => {
                let form = QuestionForm {
                    question,
                    answer,
                    difficulty,
                    category,
                };
                self.run_add(form).await
            }
            Command::Quiz { category } => self.run_quiz(category).await,
            Command::AuthLink { callback_path } => self.print_auth_link(&callback_path).await,
        }
    }

    /// 浏览题目
    ///
    /// 列表请求在后台任务中执行，结果通过控制台事件通道返回。
    async fn run_review(&self) -> Result<()> {
        let mut console = Console::spawn_stdin();
        let mut browser = QuestionBrowser::new(self.client.clone());
        let mut review = ReviewScreen::default();

        spawn_load(&mut browser, &console, LoadRequest::unfiltered(1));
        println!("{}", HELP);

        while let Some(event) = console.next_event().await {
            match event {
                Event::Loaded(ticket, result) => {
                    let outcome = browser.complete(ticket, result, &mut console);
                    review.record(outcome, &browser);
                }
                Event::InputClosed => break,
                Event::Line(line) => {
                    let command = match ReviewCommand::parse(&line) {
                        Ok(command) => command,
                        Err(e) => {
                            println!("{}", e);
                            continue;
                        }
                    };

                    match command {
                        ReviewCommand::All => {
                            spawn_load(&mut browser, &console, LoadRequest::unfiltered(1))
                        }
                        ReviewCommand::Category(id) => {
                            spawn_load(&mut browser, &console, LoadRequest::by_category(id, 1))
                        }
                        ReviewCommand::Search(term) => {
                            spawn_load(&mut browser, &console, LoadRequest::by_search(term, 1))
                        }
                        ReviewCommand::Page(page) => match browser.page_request(page) {
                            Some(request) => spawn_load(&mut browser, &console, request),
                            None => println!(
                                "page {} is out of range (1..={})",
                                page,
                                browser.state().page_count()
                            ),
                        },
                        ReviewCommand::Flip(id) => match review.card_mut(id) {
                            Some(card) => {
                                card.flip();
                                review.draw(&browser);
                            }
                            None => println!("question {} is not on this page", id),
                        },
                        ReviewCommand::Delete(id) => {
                            if let Some(card) = review.card_mut(id) {
                                let view::CardAction::Delete(id) = card.delete_action();
                                let outcome = browser.delete_question(id, &mut console).await;
                                if let DeleteOutcome::Deleted(reload) = outcome {
                                    review.stats.deleted += 1;
                                    review.record(reload, &browser);
                                }
                            } else {
                                println!("question {} is not on this page", id);
                            }
                        }
                        ReviewCommand::Nav(label) => match nav_url(&self.config, &label) {
                            Some(url) => println!("{}", url),
                            None => println!("unknown page: {}", label),
                        },
                        ReviewCommand::Show => review.draw(&browser),
                        ReviewCommand::Help => println!("{}", HELP),
                        ReviewCommand::Quit => break,
                    }
                }
            }
        }

        logging::print_session_stats(&review.stats);
        Ok(())
    }

    /// 新增题目
    async fn run_add(&self, form: QuestionForm) -> Result<()> {
        let categories = self
            .client
            .list_categories()
            .await
            .context("无法获取分类列表")?;

        let id = form
            .submit(&self.client, &categories)
            .await
            .context("新增题目失败")?;
        println!("created question #{}", id);
        Ok(())
    }

    /// 测验
    async fn run_quiz(&self, category_id: Option<i64>) -> Result<()> {
        let categories = self
            .client
            .list_categories()
            .await
            .context("无法获取分类列表")?;
        let category = match category_id {
            Some(id) => Some(find_category(&categories, id)?),
            None => None,
        };

        let mut console = Console::spawn_stdin();
        let mut quiz = QuizSession::new(category);
        info!("🎯 开始测验，分类: {}", quiz.category().kind);

        loop {
            let text = match quiz.next_question(&self.client).await {
                Ok(Some(question)) => question.question.clone(),
                Ok(None) => break,
                Err(e) => {
                    warn!("❌ 获取测验题目失败: {}", e);
                    println!("⚠️  Unable to load question. Please try your request again");
                    break;
                }
            };

            let prompt = format!("[{}/{}] {}", quiz.asked(), QUESTIONS_PER_PLAY, text);
            let Some(guess) = console.read_line(&prompt).await else {
                break;
            };
            if let Some(result) = quiz.submit_guess(&guess) {
                if result.correct {
                    println!("✅ correct: {}", result.answer);
                } else {
                    println!("❌ the answer was: {}", result.answer);
                }
            }
        }

        println!("Your score: {} / {}", quiz.score(), quiz.asked());
        Ok(())
    }

    /// 打印登录链接
    async fn print_auth_link(&self, callback_path: &str) -> Result<()> {
        let env = loaders::load_or_default(self.config.auth_env_file.as_deref())
            .await
            .context("无法加载认证环境")?;
        let link = env.login_link(callback_path)?;
        println!("{}", link);
        Ok(())
    }
}

/// 浏览界面：卡片与统计
#[derive(Default)]
struct ReviewScreen {
    cards: Vec<QuestionCard>,
    stats: SessionStats,
}

impl ReviewScreen {
    fn record<A: TriviaApi>(&mut self, outcome: LoadOutcome, browser: &QuestionBrowser<A>) {
        match outcome {
            LoadOutcome::Applied => {
                self.stats.loads += 1;
                self.cards = view::cards_for(browser.state());
                self.draw(browser);
            }
            LoadOutcome::Failed => self.stats.failed += 1,
            LoadOutcome::Stale => self.stats.stale += 1,
            LoadOutcome::Rejected => {}
        }
    }

    fn card_mut(&mut self, id: i64) -> Option<&mut QuestionCard> {
        self.cards.iter_mut().find(|c| c.id() == id)
    }

    fn draw<A: TriviaApi>(&self, browser: &QuestionBrowser<A>) {
        println!(
            "\n{}",
            view::render_review(browser.state(), &self.cards, &browser.render_pagination())
        );
    }
}

/// 登记请求并在后台任务中执行
fn spawn_load<A: TriviaApi>(
    browser: &mut QuestionBrowser<A>,
    console: &Console,
    request: LoadRequest,
) {
    let ticket = browser.issue(request.clone());
    let api = browser.api().clone();
    let sender = console.sender();
    tokio::spawn(async move {
        let result = crate::browser::fetch_page(&api, &request).await;
        let _ = sender.send(Event::Loaded(ticket, result));
    });
}

/// 页头导航的跳转地址，指向前端页面
fn nav_url(config: &Config, label: &str) -> Option<String> {
    NavTarget::from_label(label).map(|target| target.url(&config.frontend_url))
}

fn find_category(categories: &[Category], id: i64) -> Result<&Category> {
    categories
        .iter()
        .find(|c| c.id == id)
        .with_context(|| format!("未知分类: {}", id))
}
