//! Command handlers end to end over mock LLM and responder: validation, chunking, fallbacks.

use chef_bot::handlers::{handle_ask, handle_upload, MSG_NO_RESPONSE, MSG_REQUEST_FAILED};
use chef_bot::ImageAttachment;

mod mock_services;
use mock_services::{LlmReply, MockLlm, RecordingResponder, Sent};

#[tokio::test]
async fn ask_sends_reply_as_single_embed() {
    let llm = MockLlm::new(LlmReply::Text("Dice the onions, then sauté.".to_string()));
    let responder = RecordingResponder::default();

    handle_ask(&llm, &responder, Some("how do I make french onion soup?"))
        .await
        .unwrap();

    assert_eq!(
        llm.text_prompts.lock().unwrap().as_slice(),
        ["how do I make french onion soup?"]
    );
    assert_eq!(
        responder.sent(),
        vec![Sent::Embed("Dice the onions, then sauté.".to_string())]
    );
}

#[tokio::test]
async fn long_reply_is_split_into_embed_sized_chunks() {
    let reply = "a".repeat(5000);
    let llm = MockLlm::new(LlmReply::Text(reply.clone()));
    let responder = RecordingResponder::default();

    handle_ask(&llm, &responder, Some("a long recipe please")).await.unwrap();

    let sent = responder.sent();
    assert_eq!(sent.len(), 2);
    match (&sent[0], &sent[1]) {
        (Sent::Embed(first), Sent::Embed(second)) => {
            assert_eq!(first.chars().count(), 4096);
            assert_eq!(second.chars().count(), 904);
            assert_eq!(format!("{}{}", first, second), reply);
        }
        other => panic!("expected two embeds, got {:?}", other),
    }
}

#[tokio::test]
async fn blank_prompt_is_rejected_without_llm_call() {
    let llm = MockLlm::new(LlmReply::Text("unused".to_string()));
    let responder = RecordingResponder::default();

    handle_ask(&llm, &responder, Some("   ")).await.unwrap();
    handle_ask(&llm, &responder, None).await.unwrap();

    assert_eq!(llm.call_count(), 0);
    assert_eq!(
        responder.sent(),
        vec![
            Sent::Text("Please provide a prompt.".to_string()),
            Sent::Text("Please provide a prompt.".to_string()),
        ]
    );
}

#[tokio::test]
async fn empty_llm_reply_sends_no_response_message() {
    let llm = MockLlm::new(LlmReply::Empty);
    let responder = RecordingResponder::default();

    handle_ask(&llm, &responder, Some("anything")).await.unwrap();

    assert_eq!(responder.sent(), vec![Sent::Text(MSG_NO_RESPONSE.to_string())]);
}

#[tokio::test]
async fn llm_failure_sends_generic_error() {
    let llm = MockLlm::new(LlmReply::Fail("401 invalid api key".to_string()));
    let responder = RecordingResponder::default();

    handle_ask(&llm, &responder, Some("anything")).await.unwrap();

    let sent = responder.sent();
    assert_eq!(sent, vec![Sent::Text(MSG_REQUEST_FAILED.to_string())]);
}

#[tokio::test]
async fn upload_sends_image_url_to_llm() {
    let llm = MockLlm::new(LlmReply::Text("This is a margherita pizza.".to_string()));
    let responder = RecordingResponder::default();
    let image = ImageAttachment::new(
        "https://cdn.discordapp.com/attachments/1/2/pizza.jpg",
        "pizza.jpg",
        Some("image/jpeg".to_string()),
    );

    handle_upload(&llm, &responder, Some(&image)).await.unwrap();

    assert_eq!(
        llm.image_urls.lock().unwrap().as_slice(),
        ["https://cdn.discordapp.com/attachments/1/2/pizza.jpg"]
    );
    assert!(llm.text_prompts.lock().unwrap().is_empty());
    assert_eq!(
        responder.sent(),
        vec![Sent::Embed("This is a margherita pizza.".to_string())]
    );
}

#[tokio::test]
async fn upload_rejects_non_image_without_llm_call() {
    let llm = MockLlm::new(LlmReply::Text("unused".to_string()));
    let responder = RecordingResponder::default();
    let pdf = ImageAttachment::new(
        "https://cdn.discordapp.com/attachments/1/2/menu.pdf",
        "menu.pdf",
        Some("application/pdf".to_string()),
    );

    handle_upload(&llm, &responder, Some(&pdf)).await.unwrap();

    assert_eq!(llm.call_count(), 0);
    assert_eq!(
        responder.sent(),
        vec![Sent::Text(
            "That file is not an image, upload an image of a food.".to_string()
        )]
    );
}

#[tokio::test]
async fn upload_without_attachment_is_rejected() {
    let llm = MockLlm::new(LlmReply::Text("unused".to_string()));
    let responder = RecordingResponder::default();

    handle_upload(&llm, &responder, None).await.unwrap();

    assert_eq!(llm.call_count(), 0);
    assert_eq!(
        responder.sent(),
        vec![Sent::Text(
            "No attachments found, upload an image of a food.".to_string()
        )]
    );
}
