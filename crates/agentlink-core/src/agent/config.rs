use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// The agent's name
    pub name: String,
    /// The agent's description
    pub description: String,
    /// The Agent ID
    pub id: Uuid,
}

impl AgentConfig {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            id: Uuid::new_v4(),
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            id: Uuid::nil(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_config_default() {
        let config = AgentConfig::default();
        assert!(config.name.is_empty());
        assert!(config.description.is_empty());
        assert!(config.id.is_nil());
    }

    #[test]
    fn test_agent_config_new() {
        let config = AgentConfig::new("TestAgent", "A test agent for unit tests");
        assert_eq!(config.name, "TestAgent");
        assert_eq!(config.description, "A test agent for unit tests");
        assert!(!config.id.is_nil());
    }

    #[test]
    fn test_agent_config_unique_ids() {
        let config1 = AgentConfig::new("Agent1", "Description1");
        let config2 = AgentConfig::new("Agent2", "Description2");
        assert_ne!(config1.id, config2.id);
    }
}
