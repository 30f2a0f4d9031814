use std::future::Future;

/// 加载或删除失败时给用户的提示
pub const REQUEST_FAILED_NOTICE: &str = "Unable to load questions. Please try your request again";

/// 删除前的确认提示
pub const DELETE_CONFIRM_PROMPT: &str = "are you sure you want to delete the question?";

/// 与用户交互的能力：阻塞提示和确认
pub trait UserPrompt {
    /// 弹出一条需要用户知晓的提示
    fn alert(&mut self, message: &str);

    /// 请求用户确认，返回是否同意
    fn confirm(&mut self, message: &str) -> impl Future<Output = bool>;
}
