use std::collections::HashSet;

use log::debug;

use crate::task::error::TaskError;
use crate::task::task::Task;

/// The project's tasks, in registration order.
#[derive(Debug, Clone, Default)]
pub struct TaskContainer {
    tasks: Vec<Task>,
}

/// DFS state for ordering a run
struct PlanVisit<'a> {
    scheduled: &'a HashSet<String>,
    visited: HashSet<String>,
    /// Tasks on the current DFS path, for cycle reporting
    stack: Vec<String>,
    result: Vec<String>,
}

impl TaskContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, task: Task) -> Result<&mut Task, TaskError> {
        if self.contains(task.name()) {
            return Err(TaskError::AlreadyExists {
                name: task.name().to_string(),
            });
        }
        debug!("Registered task '{}'", task.name());
        self.tasks.push(task);
        let index = self.tasks.len() - 1;
        Ok(&mut self.tasks[index])
    }

    /// Register a lifecycle placeholder unless a task of that name exists.
    pub fn maybe_register_lifecycle(&mut self, name: &str) -> &mut Task {
        let index = match self.tasks.iter().position(|t| t.name() == name) {
            Some(index) => index,
            None => {
                self.tasks.push(Task::lifecycle(name));
                self.tasks.len() - 1
            }
        };
        &mut self.tasks[index]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.iter().any(|t| t.name() == name)
    }

    pub fn get(&self, name: &str) -> Result<&Task, TaskError> {
        self.tasks
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| TaskError::NotFound { name: name.to_string() })
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Task, TaskError> {
        self.tasks
            .iter_mut()
            .find(|t| t.name() == name)
            .ok_or_else(|| TaskError::NotFound { name: name.to_string() })
    }

    pub fn names(&self) -> Vec<&str> {
        self.tasks.iter().map(Task::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Check that every task reference is known and that no ordering cycle
    /// exists among all registered tasks.
    pub fn validate(&self) -> Result<(), TaskError> {
        for task in &self.tasks {
            for other in task.dependencies().iter().chain(task.must_run_after_tasks()) {
                if !self.contains(other) {
                    return Err(TaskError::UnknownDependency {
                        task: task.name().to_string(),
                        dependency: other.clone(),
                    });
                }
            }
        }
        let names: Vec<&str> = self.names();
        self.execution_plan(&names).map(|_| ())
    }

    /// Order the requested tasks and everything they depend on.
    ///
    /// Dependencies always run first. A must-run-after constraint only orders
    /// two tasks when both are scheduled; it never schedules a task by itself.
    /// Among unconstrained tasks, request order then declaration order is kept.
    pub fn execution_plan(&self, requested: &[&str]) -> Result<Vec<String>, TaskError> {
        let mut scheduled = HashSet::new();
        for name in requested {
            self.schedule(name, &mut scheduled)?;
        }

        let mut visit = PlanVisit {
            scheduled: &scheduled,
            visited: HashSet::new(),
            stack: Vec::new(),
            result: Vec::new(),
        };
        for name in requested {
            self.visit_for_plan(name, &mut visit)?;
        }
        debug!("Execution plan for {:?}: {:?}", requested, visit.result);
        Ok(visit.result)
    }

    /// Collect `name` and its transitive dependencies.
    fn schedule(&self, name: &str, scheduled: &mut HashSet<String>) -> Result<(), TaskError> {
        if scheduled.contains(name) {
            return Ok(());
        }
        let task = self.get(name)?;
        scheduled.insert(name.to_string());
        for dependency in task.dependencies() {
            if !self.contains(dependency) {
                return Err(TaskError::UnknownDependency {
                    task: name.to_string(),
                    dependency: dependency.clone(),
                });
            }
            self.schedule(dependency, scheduled)?;
        }
        Ok(())
    }

    fn visit_for_plan(&self, name: &str, visit: &mut PlanVisit<'_>) -> Result<(), TaskError> {
        if let Some(start) = visit.stack.iter().position(|t| t == name) {
            let mut path = visit.stack[start..].to_vec();
            path.push(name.to_string());
            return Err(TaskError::CycleDetected { path });
        }
        if visit.visited.contains(name) {
            return Ok(());
        }

        visit.stack.push(name.to_string());
        let task = self.get(name)?;
        for dependency in task.dependencies() {
            self.visit_for_plan(dependency, visit)?;
        }
        for earlier in task.must_run_after_tasks() {
            if visit.scheduled.contains(earlier) {
                self.visit_for_plan(earlier, visit)?;
            }
        }
        visit.stack.pop();

        visit.visited.insert(name.to_string());
        visit.result.push(name.to_string());
        Ok(())
    }
}
