use std::fmt;

/// Fully-qualified name of a Pub/Sub subscription.
///
/// Rendered as `projects/{project}/subscriptions/{subscription}`, the form the
/// Pub/Sub API expects when a subscription is addressed across projects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionPath {
    project_id: String,
    subscription_id: String,
}

impl SubscriptionPath {
    /// Builds a subscription path from its project and subscription parts.
    #[must_use]
    pub fn new(project_id: impl Into<String>, subscription_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            subscription_id: subscription_id.into(),
        }
    }

    /// Project owning the subscription.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Short subscription identifier within the project.
    #[must_use]
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }
}

impl fmt::Display for SubscriptionPath {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "projects/{}/subscriptions/{}",
            self.project_id, self.subscription_id
        )
    }
}
