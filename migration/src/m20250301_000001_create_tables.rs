use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::UserId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::FullName).string().not_null())
                    .col(ColumnDef::new(Students::GradeLevel).string().not_null())
                    .col(ColumnDef::new(Students::Subjects).text().not_null())
                    .col(ColumnDef::new(Students::ProfilePicture).string().null())
                    .col(ColumnDef::new(Students::Timezone).string().not_null())
                    .col(ColumnDef::new(Students::LearningGoals).text().not_null())
                    .col(ColumnDef::new(Students::StudyPreferences).text().not_null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建测评表
        manager
            .create_table(
                Table::create()
                    .table(Assessments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assessments::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assessments::StudentId).string().not_null())
                    .col(ColumnDef::new(Assessments::Subject).string().not_null())
                    .col(
                        ColumnDef::new(Assessments::AssessmentType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assessments::Score).double().not_null())
                    .col(ColumnDef::new(Assessments::MaxScore).double().not_null())
                    .col(ColumnDef::new(Assessments::WeakAreas).text().not_null())
                    .col(ColumnDef::new(Assessments::StrongAreas).text().not_null())
                    .col(
                        ColumnDef::new(Assessments::Recommendations)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assessments::TimeTaken).big_integer().null())
                    .col(
                        ColumnDef::new(Assessments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assessments::Table, Assessments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::StudentId).string().not_null())
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::Subject).string().not_null())
                    .col(ColumnDef::new(Assignments::Description).text().not_null())
                    .col(ColumnDef::new(Assignments::SubmissionText).text().null())
                    .col(ColumnDef::new(Assignments::AiFeedback).text().null())
                    .col(ColumnDef::new(Assignments::TeacherFeedback).text().null())
                    .col(ColumnDef::new(Assignments::Grade).double().null())
                    .col(ColumnDef::new(Assignments::MaxGrade).double().not_null())
                    .col(ColumnDef::new(Assignments::Status).string().not_null())
                    .col(ColumnDef::new(Assignments::DueDate).big_integer().null())
                    .col(ColumnDef::new(Assignments::SubmittedAt).big_integer().null())
                    .col(ColumnDef::new(Assignments::GradedAt).big_integer().null())
                    .col(
                        ColumnDef::new(Assignments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建对话会话表
        manager
            .create_table(
                Table::create()
                    .table(ChatSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChatSessions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ChatSessions::StudentId).string().not_null())
                    .col(ColumnDef::new(ChatSessions::Subject).string().not_null())
                    .col(ColumnDef::new(ChatSessions::SessionTitle).string().null())
                    .col(ColumnDef::new(ChatSessions::Messages).text().not_null())
                    .col(ColumnDef::new(ChatSessions::ContextData).text().not_null())
                    .col(
                        ColumnDef::new(ChatSessions::SessionStatus)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChatSessions::Version)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ChatSessions::LastMessageAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChatSessions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ChatSessions::Table, ChatSessions::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assessments_student_subject")
                    .table(Assessments::Table)
                    .col(Assessments::StudentId)
                    .col(Assessments::Subject)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_student_id")
                    .table(Assignments::Table)
                    .col(Assignments::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_chat_sessions_student_subject")
                    .table(ChatSessions::Table)
                    .col(ChatSessions::StudentId)
                    .col(ChatSessions::Subject)
                    .col(ChatSessions::SessionStatus)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChatSessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assessments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    UserId,
    FullName,
    GradeLevel,
    Subjects,
    ProfilePicture,
    Timezone,
    LearningGoals,
    StudyPreferences,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Assessments {
    #[sea_orm(iden = "assessments")]
    Table,
    Id,
    StudentId,
    Subject,
    AssessmentType,
    Score,
    MaxScore,
    WeakAreas,
    StrongAreas,
    Recommendations,
    TimeTaken,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    StudentId,
    Title,
    Subject,
    Description,
    SubmissionText,
    AiFeedback,
    TeacherFeedback,
    Grade,
    MaxGrade,
    Status,
    DueDate,
    SubmittedAt,
    GradedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ChatSessions {
    #[sea_orm(iden = "chat_sessions")]
    Table,
    Id,
    StudentId,
    Subject,
    SessionTitle,
    Messages,
    ContextData,
    SessionStatus,
    Version,
    LastMessageAt,
    CreatedAt,
}
