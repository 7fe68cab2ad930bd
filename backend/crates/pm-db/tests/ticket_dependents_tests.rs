mod common;

use common::{
    create_test_comment, create_test_demo_script, create_test_finding, create_test_pool,
    create_test_project, create_test_ticket, create_test_ticket_state,
};

use pm_core::{CommentType, FindingSeverity};
use pm_db::{
    CommentRepository, DemoScriptRepository, ReviewFindingRepository, TicketRepository,
    WorkflowStateRepository,
};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_comment_when_created_then_found_by_ticket() {
    let pool = create_test_pool().await;
    let project = create_test_project(&pool, "Alpha").await;
    let ticket = create_test_ticket(project.id, None, "t", 0);
    TicketRepository::create(&pool, &ticket).await.unwrap();

    let mut comment = create_test_comment(ticket.id);
    comment.comment_type = CommentType::WorkSummary;
    CommentRepository::create(&pool, &comment).await.unwrap();

    let found = CommentRepository::find_by_ticket(&pool, ticket.id)
        .await
        .unwrap();
    assert_that!(found, len(eq(1)));
    assert_that!(found[0].comment_type, eq(CommentType::WorkSummary));
    assert_that!(found[0].content, eq(&comment.content));
}

#[tokio::test]
async fn given_comment_for_unknown_ticket_when_created_then_foreign_key_fails() {
    let pool = create_test_pool().await;

    let result = CommentRepository::create(&pool, &create_test_comment(Uuid::new_v4())).await;

    assert_that!(result, err(anything()));
}

#[tokio::test]
async fn given_finding_and_demo_script_when_created_then_found_by_ticket() {
    let pool = create_test_pool().await;
    let project = create_test_project(&pool, "Alpha").await;
    let ticket = create_test_ticket(project.id, None, "t", 0);
    TicketRepository::create(&pool, &ticket).await.unwrap();

    let finding = create_test_finding(ticket.id);
    ReviewFindingRepository::create(&pool, &finding)
        .await
        .unwrap();
    let script = create_test_demo_script(ticket.id);
    DemoScriptRepository::create(&pool, &script).await.unwrap();

    let findings = ReviewFindingRepository::find_by_ticket(&pool, ticket.id)
        .await
        .unwrap();
    assert_that!(findings, len(eq(1)));
    assert_that!(findings[0].severity, eq(FindingSeverity::Major));
    assert_that!(findings[0].suggested_fix, eq(&finding.suggested_fix));

    let scripts = DemoScriptRepository::find_by_ticket(&pool, ticket.id)
        .await
        .unwrap();
    assert_that!(scripts, len(eq(1)));
    assert_that!(scripts[0].steps, eq(&script.steps));
    assert_that!(scripts[0].passed, none());
}

#[tokio::test]
async fn given_ticket_state_when_inserted_twice_then_second_insert_fails() {
    let pool = create_test_pool().await;
    let project = create_test_project(&pool, "Alpha").await;
    let ticket = create_test_ticket(project.id, None, "t", 0);
    TicketRepository::create(&pool, &ticket).await.unwrap();
    let state = create_test_ticket_state(ticket.id);

    WorkflowStateRepository::create_ticket_state(&pool, &state)
        .await
        .unwrap();
    let second = WorkflowStateRepository::create_ticket_state(&pool, &state).await;

    assert_that!(second, err(anything()));
    let found = WorkflowStateRepository::find_ticket_state(&pool, ticket.id)
        .await
        .unwrap();
    assert_that!(found.map(|s| s.current_phase), some(eq("implementation")));
}
