//! 题目浏览器 - 分页、筛选与删除
//!
//! 每个列表请求都会领取一个 `Ticket`。结果回来时只有最新的 ticket 会被应用，
//! 较早发出、较晚返回的结果直接丢弃，避免旧数据覆盖新数据。
//!
//! 请求既可以用 `load_*` 系列方法原地等待，也可以拆成 `issue` + `complete`
//! 两步，由调用方把 HTTP 调用放到后台任务中执行。

use crate::browser::pagination::{render_pagination, PageControl};
use crate::browser::prompt::{UserPrompt, DELETE_CONFIRM_PROMPT, REQUEST_FAILED_NOTICE};
use crate::browser::state::{page_count, BrowserState, FilterMode, LoadRequest, Ticket};
use crate::clients::TriviaApi;
use crate::error::ApiResult;
use crate::models::QuestionList;
use tracing::{debug, info, warn};

/// 单次加载的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 新状态已生效
    Applied,
    /// 已有更新的请求发出，本次结果被丢弃
    Stale,
    /// 请求失败，已提示用户，状态不变
    Failed,
    /// 参数不合法，没有发出请求
    Rejected,
}

/// 删除的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// 用户取消
    Cancelled,
    /// 删除请求失败，已提示用户
    Failed,
    /// 删除成功，并按重载结果返回
    Deleted(LoadOutcome),
}

/// 按请求调用对应的后端接口
pub async fn fetch_page<A: TriviaApi>(api: &A, request: &LoadRequest) -> ApiResult<QuestionList> {
    match &request.filter {
        FilterMode::Unfiltered => api.list_questions(request.page).await,
        FilterMode::ByCategory(id) => api.questions_by_category(*id, request.page).await,
        FilterMode::BySearch(term) => api.search_questions(term, request.page).await,
    }
}

/// 题目浏览器
pub struct QuestionBrowser<A: TriviaApi> {
    api: A,
    state: BrowserState,
    next_ticket: u64,
    /// 最新发出且尚未完成的请求
    pending: Option<(Ticket, LoadRequest)>,
    /// 最近一次发出的请求，删除后按它重载
    last_request: LoadRequest,
}

impl<A: TriviaApi> QuestionBrowser<A> {
    /// 创建空状态的浏览器，调用方随后应执行一次 `load_unfiltered(1)`
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: BrowserState::default(),
            next_ticket: 0,
            pending: None,
            last_request: LoadRequest::unfiltered(1),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn last_request(&self) -> &LoadRequest {
        &self.last_request
    }

    // ============ 两步式请求 ============

    /// 登记一个新请求，之前未完成的请求随即作废
    pub fn issue(&mut self, request: LoadRequest) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);

        if let Some((old, old_request)) = &self.pending {
            debug!("请求 {} {} 被 {} 取代", old, old_request, ticket);
        }
        info!("📥 发出请求 {} {}", ticket, request);

        self.last_request = request.clone();
        self.pending = Some((ticket, request));
        ticket
    }

    /// 处理请求结果
    pub fn complete<P: UserPrompt>(
        &mut self,
        ticket: Ticket,
        result: ApiResult<QuestionList>,
        prompt: &mut P,
    ) -> LoadOutcome {
        let request = match self.pending.take() {
            Some((latest, request)) if latest == ticket => request,
            other => {
                self.pending = other;
                debug!("丢弃过期响应 {}", ticket);
                return LoadOutcome::Stale;
            }
        };

        match result {
            Ok(list) => {
                if let (FilterMode::ByCategory(id), Some(current)) =
                    (&request.filter, list.current_category)
                {
                    if *id != current {
                        warn!("⚠️ 请求分类 {} 但后端返回分类 {}", id, current);
                    }
                }
                self.state = self.state.apply(&request, list);
                info!(
                    "✓ {} 加载完成: 本页 {} 题 / 共 {} 题",
                    request,
                    self.state.questions.len(),
                    self.state.total_questions
                );
                LoadOutcome::Applied
            }
            Err(e) => {
                warn!("❌ {} 加载失败: {}", request, e);
                prompt.alert(REQUEST_FAILED_NOTICE);
                LoadOutcome::Failed
            }
        }
    }

    // ============ 加载 ============

    /// 发出请求并等待结果
    pub async fn load<P: UserPrompt>(
        &mut self,
        request: LoadRequest,
        prompt: &mut P,
    ) -> LoadOutcome {
        let ticket = self.issue(request.clone());
        let result = fetch_page(&self.api, &request).await;
        self.complete(ticket, result, prompt)
    }

    /// 加载全部题目的第 `page` 页
    pub async fn load_unfiltered<P: UserPrompt>(
        &mut self,
        page: u32,
        prompt: &mut P,
    ) -> LoadOutcome {
        if page == 0 {
            return LoadOutcome::Rejected;
        }
        self.load(LoadRequest::unfiltered(page), prompt).await
    }

    /// 加载某个分类的第 `page` 页
    pub async fn load_by_category<P: UserPrompt>(
        &mut self,
        category_id: i64,
        page: u32,
        prompt: &mut P,
    ) -> LoadOutcome {
        if page == 0 {
            return LoadOutcome::Rejected;
        }
        self.load(LoadRequest::by_category(category_id, page), prompt)
            .await
    }

    /// 按关键字搜索，空白关键字不发请求
    pub async fn load_by_search<P: UserPrompt>(
        &mut self,
        term: &str,
        page: u32,
        prompt: &mut P,
    ) -> LoadOutcome {
        match search_request(term, page) {
            Some(request) => self.load(request, prompt).await,
            None => LoadOutcome::Rejected,
        }
    }

    /// 翻页：沿用当前筛选方式
    pub async fn select_page<P: UserPrompt>(&mut self, page: u32, prompt: &mut P) -> LoadOutcome {
        match self.page_request(page) {
            Some(request) => self.load(request, prompt).await,
            None => LoadOutcome::Rejected,
        }
    }

    /// 当前筛选方式下第 `page` 页的请求
    ///
    /// 页码为 0，或已知总页数且超出范围时返回 `None`。
    pub fn page_request(&self, page: u32) -> Option<LoadRequest> {
        let page_count = self.state.page_count();
        if page == 0 || (page_count > 0 && page > page_count) {
            warn!("页码 {} 超出范围 [1, {}]", page, page_count);
            return None;
        }
        Some(LoadRequest {
            filter: self.state.filter.clone(),
            page,
        })
    }

    // ============ 删除 ============

    /// 删除后重载使用的请求
    ///
    /// 重放最近一次请求；不筛选时回到第 1 页。筛选时页码不超过
    /// 删掉一题后剩余的总页数（至少为 1）。
    pub fn reload_request(&self) -> LoadRequest {
        let last = &self.last_request;
        if last.filter == FilterMode::Unfiltered {
            return LoadRequest::unfiltered(1);
        }

        let mut request = last.clone();
        if self.state.filter == last.filter {
            let remaining = page_count(self.state.total_questions.saturating_sub(1)).max(1);
            request.page = request.page.min(remaining);
        }
        request
    }

    /// 删除题目，需要用户确认
    pub async fn delete_question<P: UserPrompt>(
        &mut self,
        id: i64,
        prompt: &mut P,
    ) -> DeleteOutcome {
        if !prompt.confirm(DELETE_CONFIRM_PROMPT).await {
            debug!("用户取消删除题目 {}", id);
            return DeleteOutcome::Cancelled;
        }

        if let Err(e) = self.api.delete_question(id).await {
            warn!("❌ 删除题目 {} 失败: {}", id, e);
            prompt.alert(REQUEST_FAILED_NOTICE);
            return DeleteOutcome::Failed;
        }

        info!("🗑️ 已删除题目 {}", id);
        let reload = self.reload_request();
        DeleteOutcome::Deleted(self.load(reload, prompt).await)
    }

    // ============ 展示 ============

    /// 分页控件
    pub fn render_pagination(&self) -> Vec<PageControl> {
        render_pagination(self.state.total_questions, self.state.page)
    }
}

fn search_request(term: &str, page: u32) -> Option<LoadRequest> {
    let term = term.trim();
    if term.is_empty() || page == 0 {
        return None;
    }
    Some(LoadRequest::by_search(term, page))
}
