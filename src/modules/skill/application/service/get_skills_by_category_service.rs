use async_trait::async_trait;

use crate::modules::skill::application::domain::{group_by_category, highest_proficiency};
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsByCategoryUseCase, GetSkillsError, SkillsByCategory,
};
use crate::modules::skill::application::ports::outgoing::SkillQuery;

pub struct GetSkillsByCategoryService<Q>
where
    Q: SkillQuery,
{
    query: Q,
}

impl<Q> GetSkillsByCategoryService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSkillsByCategoryUseCase for GetSkillsByCategoryService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self) -> Result<SkillsByCategory, GetSkillsError> {
        let skills = self.query.list_all().await?;

        let highest_proficiency = highest_proficiency(&skills);
        let total_skills = skills.len();

        Ok(SkillsByCategory {
            groups: group_by_category(skills),
            highest_proficiency,
            total_skills,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::skill::application::domain::{Proficiency, Skill, SkillCategory};
    use crate::modules::skill::application::ports::outgoing::SkillQueryError;
    use crate::tests::support::fixtures::sample_skill;

    struct MockSkillQuery {
        result: Result<Vec<Skill>, SkillQueryError>,
    }

    #[async_trait]
    impl SkillQuery for MockSkillQuery {
        async fn list_all(&self) -> Result<Vec<Skill>, SkillQueryError> {
            self.result.clone()
        }

        async fn list_featured(&self, _limit: u64) -> Result<Vec<Skill>, SkillQueryError> {
            unimplemented!("not used in GetSkillsByCategoryService tests")
        }
    }

    #[tokio::test]
    async fn groups_skills_and_reports_highest_proficiency() {
        let service = GetSkillsByCategoryService::new(MockSkillQuery {
            result: Ok(vec![
                sample_skill("Rust", SkillCategory::Programming, 90),
                sample_skill("Figma", SkillCategory::Design, 40),
                sample_skill("Python", SkillCategory::Programming, 85),
            ]),
        });

        let result = service.execute().await.unwrap();

        assert_eq!(result.total_skills, 3);
        assert_eq!(result.highest_proficiency, Some(Proficiency::new(90).unwrap()));
        assert_eq!(result.groups.len(), 2);
        assert_eq!(result.groups[0].category, SkillCategory::Programming);
        assert_eq!(result.groups[0].skills.len(), 2);
        assert_eq!(result.groups[1].category, SkillCategory::Design);
    }

    #[tokio::test]
    async fn no_skills_means_no_groups_and_no_maximum() {
        let service = GetSkillsByCategoryService::new(MockSkillQuery { result: Ok(vec![]) });

        let result = service.execute().await.unwrap();

        assert!(result.groups.is_empty());
        assert_eq!(result.highest_proficiency, None);
        assert_eq!(result.total_skills, 0);
    }

    #[tokio::test]
    async fn query_error_propagates() {
        let service = GetSkillsByCategoryService::new(MockSkillQuery {
            result: Err(SkillQueryError::DatabaseError("down".to_string())),
        });

        assert!(matches!(
            service.execute().await,
            Err(GetSkillsError::QueryFailed(_))
        ));
    }
}
