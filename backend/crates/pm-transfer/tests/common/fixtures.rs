use crate::common::TestEnv;

use pm_core::{
    Attachment, Comment, DemoScript, DemoStep, Epic, EpicWorkflowState, FindingSeverity,
    FindingStatus, ReviewFinding, Subtask, Ticket, TicketStatus, TicketWorkflowState,
};
use pm_db::{
    CommentRepository, DemoScriptRepository, EpicRepository, ReviewFindingRepository,
    TicketRepository, WorkflowStateRepository,
};

use chrono::Utc;
use uuid::Uuid;

pub const ATTACHMENT_BYTES: &[u8] = b"hello";

/// A seeded epic with two tickets and one of everything hanging off them.
pub struct SeededEpic {
    pub project_id: Uuid,
    pub epic: Epic,
    pub tickets: Vec<Ticket>,
}

pub async fn seed_epic(env: &TestEnv, project_id: Uuid, title: &str) -> SeededEpic {
    let mut epic = Epic::new(project_id, title.to_string());
    epic.description = Some("Epic description".to_string());
    epic.color = Some("#3b82f6".to_string());
    EpicRepository::create(&env.pool, &epic).await.unwrap();

    let mut first = Ticket::new(project_id, Some(epic.id), "Design schema".to_string());
    first.position = 0;
    first.status = TicketStatus::InProgress;
    first.tags = vec!["backend".to_string()];
    first.subtasks = vec![Subtask {
        id: "st-1".to_string(),
        text: "Draft tables".to_string(),
        completed: true,
    }];
    first.attachments = vec![Attachment {
        id: "att-1".to_string(),
        filename: "notes.txt".to_string(),
        path: Attachment::relative_path(&first.id.to_string(), "notes.txt"),
        mime_type: Some("text/plain".to_string()),
        size: ATTACHMENT_BYTES.len() as u64,
    }];
    first.linked_commits = vec!["deadbeef".to_string()];
    first.branch_name = Some("feature/schema".to_string());
    first.pr_number = Some(42);

    let mut second = Ticket::new(project_id, Some(epic.id), "Write migrations".to_string());
    second.position = 1;
    second.status = TicketStatus::Done;
    second.completed_at = Some(Utc::now());

    for ticket in [&first, &second] {
        TicketRepository::create(&env.pool, ticket).await.unwrap();
    }

    env.store()
        .write(&first.attachments[0].path, ATTACHMENT_BYTES)
        .await
        .unwrap();

    CommentRepository::create(
        &env.pool,
        &Comment::new(first.id, "Looks good".to_string(), "bob".to_string()),
    )
    .await
    .unwrap();

    ReviewFindingRepository::create(&env.pool, &finding(first.id))
        .await
        .unwrap();

    DemoScriptRepository::create(&env.pool, &demo_script(second.id))
        .await
        .unwrap();

    WorkflowStateRepository::create_ticket_state(
        &env.pool,
        &TicketWorkflowState {
            ticket_id: first.id,
            current_phase: "review".to_string(),
            review_iteration: 2,
            findings_count: 1,
            findings_fixed: 0,
            demo_generated: false,
            updated_at: Utc::now(),
        },
    )
    .await
    .unwrap();

    WorkflowStateRepository::create_epic_state(
        &env.pool,
        &EpicWorkflowState {
            epic_id: epic.id,
            tickets_total: 2,
            tickets_done: 1,
            learnings: vec!["Index foreign keys".to_string()],
            updated_at: Utc::now(),
        },
    )
    .await
    .unwrap();

    SeededEpic {
        project_id,
        epic,
        tickets: vec![first, second],
    }
}

pub fn finding(ticket_id: Uuid) -> ReviewFinding {
    ReviewFinding {
        id: Uuid::new_v4(),
        ticket_id,
        iteration: 1,
        agent: "code-reviewer".to_string(),
        severity: FindingSeverity::Minor,
        category: "style".to_string(),
        description: "Rename column".to_string(),
        location: Some("migrations/001.sql:3".to_string()),
        suggested_fix: None,
        status: FindingStatus::Open,
        created_at: Utc::now(),
        fixed_at: None,
    }
}

pub fn demo_script(ticket_id: Uuid) -> DemoScript {
    DemoScript {
        id: Uuid::new_v4(),
        ticket_id,
        steps: vec![DemoStep {
            order: 1,
            description: "Run the migration".to_string(),
            expected_outcome: Some("Tables exist".to_string()),
        }],
        generated_at: Utc::now(),
        completed_at: None,
        feedback: None,
        passed: None,
    }
}
