use axum::body::{to_bytes, Body};
use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use trivia_review::browser::{
    DeleteOutcome, FilterMode, LoadOutcome, QuestionBrowser, UserPrompt, REQUEST_FAILED_NOTICE,
};
use trivia_review::error::ApiError;
use trivia_review::models::{NewQuestion, QuizCategory, QuizRequest};
use trivia_review::{Config, TriviaApi, TriviaClient};

// ========== 进程内的桩服务器 ==========

#[derive(Debug, Clone)]
struct RecordedRequest {
    method: String,
    target: String,
    body: String,
}

type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

struct StubServer {
    base_url: String,
    requests: RequestLog,
}

impl StubServer {
    /// 在随机端口上运行路由，并记录每个收到的请求
    async fn start(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = RequestLog::default();

        let app = router.layer(middleware::from_fn_with_state(requests.clone(), record));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, requests }
    }

    fn client(&self) -> TriviaClient {
        let config = Config {
            api_base_url: self.base_url.clone(),
            request_timeout_secs: 5,
            ..Config::default()
        };
        TriviaClient::new(&config).unwrap()
    }

    fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn targets(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|r| format!("{} {}", r.method, r.target))
            .collect()
    }
}

async fn record(State(log): State<RequestLog>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    log.lock().unwrap().push(RecordedRequest {
        method: parts.method.to_string(),
        target: parts.uri.to_string(),
        body: String::from_utf8_lossy(&bytes).into_owned(),
    });
    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

// ========== 题库后端的固定数据 ==========

type Reply = (StatusCode, Json<Value>);

fn ok(body: Value) -> Reply {
    (StatusCode::OK, Json(body))
}

async fn not_found() -> Reply {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"success": false, "error": 404, "message": "Resource Not Found"})),
    )
}

async fn all_questions() -> Reply {
    ok(json!({
        "success": true,
        "questions": [
            {
                "id": 5, "question": "What is H2O?", "answer": "Water",
                "category": 1, "difficulty": 1
            },
            {
                "id": 9, "question": "Who painted Guernica?", "answer": "Picasso",
                "category": "2", "difficulty": 3
            }
        ],
        "total_questions": 23,
        "categories": [{"id": 1, "type": "Science"}, {"id": 2, "type": "Art"}],
        "current_category": null
    }))
}

async fn category_questions(Path(id): Path<i64>) -> Reply {
    if id != 1 {
        return not_found().await;
    }
    ok(json!({
        "success": true,
        "questions": [
            {"id": 5, "question": "What is H2O?", "answer": "Water", "category": 1, "difficulty": 1}
        ],
        "total_questions": 1,
        "categories": [{"id": 1, "type": "Science"}],
        "current_category": 1
    }))
}

async fn search() -> Reply {
    ok(json!({
        "success": true,
        "questions": [],
        "total_questions": 0,
        "current_category": null
    }))
}

async fn delete_question(Path(id): Path<i64>) -> Reply {
    if id != 5 {
        return not_found().await;
    }
    ok(json!({"success": true, "deleted": 5}))
}

async fn categories() -> Reply {
    ok(json!({"success": true, "categories": [{"id": 1, "type": "Science"}]}))
}

fn backend() -> Router {
    Router::new()
        .route(
            "/questions",
            get(all_questions).post(|| async { ok(json!({"success": true, "created": 24})) }),
        )
        .route("/questions/search", post(search))
        .route("/questions/{id}", delete(delete_question))
        .route("/categories/{id}/questions", get(category_questions))
        .route("/categories", get(categories))
        .route(
            "/quizzes",
            post(|| async { ok(json!({"success": true, "question": null})) }),
        )
        .fallback(not_found)
}

// ========== 测试用的用户 ==========

#[derive(Default)]
struct RecordingPrompt {
    alerts: Vec<String>,
    accept: bool,
}

impl UserPrompt for RecordingPrompt {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    async fn confirm(&mut self, _message: &str) -> bool {
        self.accept
    }
}

#[tokio::test]
async fn test_category_then_select_page_requests_category_endpoint() {
    let server = StubServer::start(backend()).await;
    let mut prompt = RecordingPrompt::default();
    let mut browser = QuestionBrowser::new(server.client());

    assert_eq!(browser.load_unfiltered(1, &mut prompt).await, LoadOutcome::Applied);
    assert_eq!(browser.state().total_questions, 23);
    assert_eq!(browser.render_pagination().len(), 3);
    assert_eq!(browser.state().category_label(2), "Art");

    assert_eq!(
        browser.load_by_category(1, 1, &mut prompt).await,
        LoadOutcome::Applied
    );
    assert_eq!(browser.state().filter, FilterMode::ByCategory(1));
    assert_eq!(browser.state().questions[0].id, 5);

    assert_eq!(browser.select_page(1, &mut prompt).await, LoadOutcome::Applied);

    assert_eq!(
        server.targets(),
        vec![
            "GET /questions?page=1",
            "GET /categories/1/questions?page=1",
            "GET /categories/1/questions?page=1",
        ]
    );
    assert!(prompt.alerts.is_empty());
}

#[tokio::test]
async fn test_search_posts_term_and_keeps_categories() {
    let server = StubServer::start(backend()).await;
    let mut prompt = RecordingPrompt::default();
    let mut browser = QuestionBrowser::new(server.client());

    browser.load_unfiltered(1, &mut prompt).await;
    browser.load_by_search("title", 1, &mut prompt).await;

    let last = server.requests().pop().unwrap();
    assert_eq!(last.method, "POST");
    assert_eq!(last.target, "/questions/search?page=1");
    let body: Value = serde_json::from_str(&last.body).unwrap();
    assert_eq!(body, json!({"searchTerm": "title"}));

    assert_eq!(browser.state().search_term(), Some("title"));
    assert_eq!(browser.state().categories.len(), 2);
    assert!(browser.render_pagination().is_empty());
}

#[tokio::test]
async fn test_error_status_alerts_once_and_keeps_state() {
    let router = Router::new()
        .route("/questions", get(all_questions))
        .fallback(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": 500, "message": "boom"})),
            )
        });
    let server = StubServer::start(router).await;
    let mut prompt = RecordingPrompt::default();
    let mut browser = QuestionBrowser::new(server.client());

    browser.load_unfiltered(1, &mut prompt).await;
    let before = browser.state().clone();

    assert_eq!(
        browser.load_by_search("anything", 1, &mut prompt).await,
        LoadOutcome::Failed
    );
    assert_eq!(browser.state(), &before);
    assert_eq!(prompt.alerts, vec![REQUEST_FAILED_NOTICE.to_string()]);
}

#[tokio::test]
async fn test_delete_then_reload_first_page() {
    let server = StubServer::start(backend()).await;
    let mut prompt = RecordingPrompt {
        accept: true,
        ..RecordingPrompt::default()
    };
    let mut browser = QuestionBrowser::new(server.client());

    browser.load_unfiltered(2, &mut prompt).await;
    let outcome = browser.delete_question(5, &mut prompt).await;

    assert_eq!(outcome, DeleteOutcome::Deleted(LoadOutcome::Applied));
    assert_eq!(
        server.targets(),
        vec![
            "GET /questions?page=2",
            "DELETE /questions/5",
            "GET /questions?page=1",
        ]
    );
}

#[tokio::test]
async fn test_client_error_kinds() {
    let router = Router::new()
        .route(
            "/categories",
            get(|| async { ok(json!({"success": false, "message": "nope"})) }),
        )
        .fallback(not_found);
    let server = StubServer::start(router).await;
    let client = server.client();

    let err = client.list_categories().await.unwrap_err();
    assert!(matches!(err, ApiError::Unsuccessful { .. }));

    let err = client.questions_by_category(99, 1).await.unwrap_err();
    match err {
        ApiError::BadStatus { status, message, .. } => {
            assert_eq!(status, 404);
            assert_eq!(message.as_deref(), Some("Resource Not Found"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_request_failure() {
    // 先占用再释放一个端口，确保无人监听
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = Config {
        api_base_url: format!("http://{}", addr),
        request_timeout_secs: 2,
        ..Config::default()
    };
    let client = TriviaClient::new(&config).unwrap();
    let err = client.list_questions(1).await.unwrap_err();
    assert!(matches!(err, ApiError::RequestFailed { .. }));
}

#[tokio::test]
async fn test_create_and_quiz_endpoints() {
    let server = StubServer::start(backend()).await;
    let client = server.client();

    let id = client
        .create_question(&NewQuestion {
            question: "Q".to_string(),
            answer: "A".to_string(),
            difficulty: 2,
            category: 1,
        })
        .await
        .unwrap();
    assert_eq!(id, 24);

    let next = client
        .next_quiz_question(&QuizRequest {
            previous_questions: vec![5],
            quiz_category: QuizCategory::all(),
        })
        .await
        .unwrap();
    assert!(next.is_none());

    let quiz_body: Value = serde_json::from_str(&server.requests()[1].body).unwrap();
    assert_eq!(quiz_body["previous_questions"], json!([5]));
    assert_eq!(quiz_body["quiz_category"]["id"], json!(0));
}

// ========== 真实后端 ==========

#[tokio::test]
#[ignore] // 需要本地运行题库后端：cargo test -- --ignored
async fn test_live_backend_first_page() {
    let _ = tracing_subscriber::fmt::try_init();

    let config = Config::default();
    let client = TriviaClient::new(&config).expect("创建客户端失败");
    let mut prompt = RecordingPrompt::default();
    let mut browser = QuestionBrowser::new(client);

    let outcome = browser.load_unfiltered(1, &mut prompt).await;

    assert_eq!(outcome, LoadOutcome::Applied, "应该能够加载第一页");
    assert!(browser.state().questions.len() <= 10);
    println!(
        "共 {} 道题，{} 个分类",
        browser.state().total_questions,
        browser.state().categories.len()
    );
}

#[tokio::test]
#[ignore]
async fn test_live_backend_categories() {
    let _ = tracing_subscriber::fmt::try_init();

    let client = TriviaClient::new(&Config::default()).expect("创建客户端失败");
    let categories = tokio_test::assert_ok!(client.list_categories().await);
    assert!(!categories.is_empty(), "应该至少有一个分类");
}
