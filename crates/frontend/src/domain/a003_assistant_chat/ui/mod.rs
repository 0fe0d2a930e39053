mod view;

pub use view::AssistantChatPage;
