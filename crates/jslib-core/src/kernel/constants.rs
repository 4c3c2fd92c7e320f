/// Identifier of the shared-library plugin
pub const PLUGIN_ID: &str = "jslib.shared-library";

/// Identifier of the host Java/Groovy conventions the plugin builds on
pub const JAVA_CONVENTIONS_ID: &str = "groovy";

/// Repository added by the plugin
pub const JENKINS_REPOSITORY_NAME: &str = "JenkinsPublic";
pub const JENKINS_REPOSITORY_URL: &str = "https://repo.jenkins-ci.org/public/";

// Dependency buckets declared by the plugin
pub const PLUGINS_BUCKET: &str = "jenkinsPlugins";
pub const PLUGIN_HPIS_AND_JPIS_BUCKET: &str = "jenkinsPluginHpisAndJpis";
pub const PLUGIN_LIBRARIES_BUCKET: &str = "jenkinsPluginLibraries";
pub const CORE_LIBRARIES_BUCKET: &str = "jenkinsCoreLibraries";
pub const TEST_LIBRARIES_BUCKET: &str = "jenkinsTestLibraries";
pub const TEST_LIBRARIES_RUNTIME_ONLY_BUCKET: &str = "jenkinsTestLibrariesRuntimeOnly";
pub const PIPELINE_UNIT_TEST_LIBRARIES_BUCKET: &str = "jenkinsPipelineUnitTestLibraries";

// Source sets
pub const MAIN_SOURCE_SET: &str = "main";
pub const TEST_SOURCE_SET: &str = "test";
pub const INTEGRATION_TEST_SOURCE_SET: &str = "integrationTest";

// Tasks
pub const CLASSES_TASK: &str = "classes";
pub const TEST_TASK: &str = "test";
pub const CHECK_TASK: &str = "check";
pub const GROOVYDOC_TASK: &str = "groovydoc";
pub const SOURCES_JAR_TASK: &str = "sourcesJar";
pub const GROOVYDOC_JAR_TASK: &str = "groovydocJar";
pub const INTEGRATION_TEST_TASK: &str = "integrationTest";
pub const VERIFICATION_GROUP: &str = "verification";
pub const DOCUMENTATION_GROUP: &str = "documentation";
pub const BUILD_GROUP: &str = "build";

/// System property handed to the Jenkins test harness
pub const BUILD_DIRECTORY_PROPERTY: &str = "buildDirectory";

pub const SOURCES_CLASSIFIER: &str = "sources";
pub const JAVADOC_CLASSIFIER: &str = "javadoc";

/// Default Java language level for compiled sources
pub const DEFAULT_JAVA_VERSION: &str = "1.8";

/// Version reported for projects that never set one
pub const UNSPECIFIED_VERSION: &str = "unspecified";

/// Default build output directory, relative to the project directory
pub const DEFAULT_BUILD_DIR: &str = "build";

// Baseline versions
pub const DEFAULT_GROOVY_VERSION: &str = "2.4.11";
pub const DEFAULT_CORE_VERSION: &str = "2.73.1";
pub const DEFAULT_PIPELINE_UNIT_VERSION: &str = "1.1";
pub const DEFAULT_TEST_HARNESS_VERSION: &str = "2.28";

// Coordinates
pub const GROOVY_MODULE: &str = "org.codehaus.groovy:groovy-all";
pub const CORE_MODULE: &str = "org.jenkins-ci.main:jenkins-core";
pub const TEST_HARNESS_MODULE: &str = "org.jenkins-ci.main:jenkins-test-harness";
pub const WAR_MODULE: &str = "org.jenkins-ci.main:jenkins-war";
pub const PIPELINE_UNIT_MODULE: &str = "com.lesfurets:jenkins-pipeline-unit";

pub const PLUGINS_GROUP: &str = "org.jenkins-ci.plugins";
pub const WORKFLOW_PLUGINS_GROUP: &str = "org.jenkins-ci.plugins.workflow";
