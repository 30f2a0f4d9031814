pub mod environment;
pub mod loaders;
pub mod question;

pub use environment::{Auth0Config, AuthEnvironment};
pub use loaders::{load_auth_environment, load_or_default};
pub use question::{
    Category, CategoryList, Created, NewQuestion, Question, QuestionList, QuizCategory,
    QuizQuestion, QuizRequest, SearchBody, PAGE_SIZE,
};
