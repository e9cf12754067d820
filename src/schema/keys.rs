//! Built-in Compose key descriptions.
//!
//! Declaration order is completion order, so frequently used keys come first.

use super::VariantSet;
use super::VariantSet as V;

/// A key valid directly under a service definition.
///
/// Expanded to `*.<key>` for v1 and `services.*.<key>` for v2.
pub(super) struct ServiceKey {
    pub key: &'static str,
    pub variants: VariantSet,
    pub description: &'static str,
}

/// A key addressed by a full dotted pattern.
pub(super) struct PathKey {
    pub pattern: &'static str,
    pub variants: VariantSet,
    pub description: &'static str,
}

const fn service(
    key: &'static str,
    variants: VariantSet,
    description: &'static str,
) -> ServiceKey {
    ServiceKey {
        key,
        variants,
        description,
    }
}

const fn path(
    pattern: &'static str,
    variants: VariantSet,
    description: &'static str,
) -> PathKey {
    PathKey {
        pattern,
        variants,
        description,
    }
}

pub(super) const TOP_LEVEL: &[PathKey] = &[
    path(
        "version",
        V::V2,
        "Version of the Compose file format. Omitting it selects the legacy (version 1) format.",
    ),
    path(
        "services",
        V::V2,
        "Service definitions. Each key is a service name whose value holds the configuration applied to every container started for that service.",
    ),
    path(
        "networks",
        V::V2,
        "Named networks that services can join by listing them under their own `networks` key.",
    ),
    path(
        "volumes",
        V::V2,
        "Named volumes that can be reused across multiple services and are easily retrieved and inspected.",
    ),
    path(
        "*",
        V::V1,
        "Service definition. Each top-level key names a service in the version 1 format.",
    ),
    path(
        "services.*",
        V::V2,
        "Service definition. The key is the service name.",
    ),
    path(
        "networks.*",
        V::V2,
        "Network definition. The key is the network name referenced by services.",
    ),
    path(
        "volumes.*",
        V::V2,
        "Volume definition. The key is the volume name referenced by services.",
    ),
];

pub(super) const SERVICE: &[ServiceKey] = &[
    service(
        "image",
        V::BOTH,
        "Tag or partial image ID. Can be local or remote - Compose will attempt to pull if it doesn't exist locally.",
    ),
    service(
        "build",
        V::V1,
        "Path to a directory containing a Dockerfile. A relative path is interpreted relative to the location of the yml file. This directory is also the build context sent to the Docker daemon.",
    ),
    service(
        "build",
        V::V2,
        "Configuration options applied at build time. Either a path to the build context, or a mapping with `context` and optionally `dockerfile` and `args`.",
    ),
    service(
        "command",
        V::BOTH,
        "Override the default command.",
    ),
    service(
        "ports",
        V::BOTH,
        "Expose ports. Either specify both ports (HOST:CONTAINER), or just the container port (a random host port will be chosen). Quote mappings to avoid base-60 number parsing.",
    ),
    service(
        "environment",
        V::BOTH,
        "Add environment variables. Use either an array or a dictionary. Boolean values (true, false, yes, no) need to be enclosed in quotes.",
    ),
    service(
        "volumes",
        V::BOTH,
        "Mount paths or named volumes, optionally specifying a path on the host machine (HOST:CONTAINER) or an access mode (HOST:CONTAINER:ro).",
    ),
    service(
        "depends_on",
        V::V2,
        "Express dependency between services. Services are started and stopped in dependency order.",
    ),
    service(
        "links",
        V::BOTH,
        "Link to containers in another service. Either specify both the service name and the link alias (SERVICE:ALIAS), or just the service name.",
    ),
    service(
        "networks",
        V::V2,
        "Networks to join, referencing entries under the top-level `networks` key.",
    ),
    service(
        "env_file",
        V::BOTH,
        "Add environment variables from a file. Can be a single value or a list.",
    ),
    service(
        "container_name",
        V::BOTH,
        "Specify a custom container name, rather than a generated default name.",
    ),
    service(
        "restart",
        V::BOTH,
        "Restart policy to apply when a container exits: `no`, `always`, `on-failure` or `unless-stopped`.",
    ),
    service(
        "entrypoint",
        V::BOTH,
        "Override the default entrypoint.",
    ),
    service(
        "working_dir",
        V::BOTH,
        "Working directory of the container, as with `docker run --workdir`.",
    ),
    service(
        "expose",
        V::BOTH,
        "Expose ports without publishing them to the host machine - they'll only be accessible to linked services. Only the internal port can be specified.",
    ),
    service(
        "labels",
        V::BOTH,
        "Add metadata to containers using Docker labels. Use either an array or a dictionary.",
    ),
    service(
        "logging",
        V::V2,
        "Logging configuration for the service, with a `driver` and driver `options`.",
    ),
    service(
        "network_mode",
        V::V2,
        "Network mode. Use the same values as the docker client `--net` parameter, plus `service:[service name]`.",
    ),
    service(
        "healthcheck",
        V::V2,
        "Configure a check that's run to determine whether or not containers for this service are healthy.",
    ),
    service(
        "extends",
        V::BOTH,
        "Extend another service, in the current file or another, optionally overriding configuration.",
    ),
    service(
        "external_links",
        V::BOTH,
        "Link to containers started outside this Compose file or project.",
    ),
    service(
        "extra_hosts",
        V::BOTH,
        "Add hostname mappings. Use the same values as the docker client `--add-host` parameter.",
    ),
    service(
        "user",
        V::BOTH,
        "Username or UID used to run the container process.",
    ),
    service(
        "hostname",
        V::BOTH,
        "Container host name.",
    ),
    service(
        "domainname",
        V::BOTH,
        "Container domain name.",
    ),
    service(
        "dns",
        V::BOTH,
        "Custom DNS servers. Can be a single value or a list.",
    ),
    service(
        "dns_search",
        V::BOTH,
        "Custom DNS search domains. Can be a single value or a list.",
    ),
    service(
        "cap_add",
        V::BOTH,
        "Add container capabilities. See `man 7 capabilities` for a full list.",
    ),
    service(
        "cap_drop",
        V::BOTH,
        "Drop container capabilities. See `man 7 capabilities` for a full list.",
    ),
    service(
        "devices",
        V::BOTH,
        "List of device mappings. Uses the same format as the `--device` docker client create option.",
    ),
    service(
        "privileged",
        V::BOTH,
        "Give extended privileges to the container.",
    ),
    service(
        "read_only",
        V::BOTH,
        "Mount the container's root filesystem as read only.",
    ),
    service(
        "stdin_open",
        V::BOTH,
        "Keep STDIN open even if not attached.",
    ),
    service(
        "tty",
        V::BOTH,
        "Allocate a pseudo-TTY.",
    ),
    service(
        "ulimits",
        V::BOTH,
        "Override the default ulimits for a container. Either a single limit as an integer or soft/hard limits as a mapping.",
    ),
    service(
        "security_opt",
        V::BOTH,
        "Override the default labeling scheme for each container.",
    ),
    service(
        "stop_signal",
        V::BOTH,
        "Signal sent to the container to stop it. Defaults to SIGTERM.",
    ),
    service(
        "stop_grace_period",
        V::V2,
        "How long to wait after the stop signal before sending SIGKILL.",
    ),
    service(
        "pid",
        V::BOTH,
        "Sets the PID mode to the host PID mode, sharing the process ID address space between container and host.",
    ),
    service(
        "ipc",
        V::BOTH,
        "IPC namespace to use, as with `docker run --ipc`.",
    ),
    service(
        "tmpfs",
        V::V2,
        "Mount a temporary file system inside the container. Can be a single value or a list.",
    ),
    service(
        "sysctls",
        V::V2,
        "Kernel parameters to set in the container. Use either an array or a dictionary.",
    ),
    service(
        "mac_address",
        V::BOTH,
        "Container MAC address.",
    ),
    service(
        "cgroup_parent",
        V::BOTH,
        "Specify an optional parent cgroup for the container.",
    ),
    service(
        "cpu_shares",
        V::BOTH,
        "CPU shares (relative weight).",
    ),
    service(
        "cpu_quota",
        V::BOTH,
        "Limit the CPU CFS (Completely Fair Scheduler) quota.",
    ),
    service(
        "cpuset",
        V::BOTH,
        "CPUs in which to allow execution.",
    ),
    service(
        "mem_limit",
        V::BOTH,
        "Memory limit, as a byte value with an optional unit (b, k, m or g).",
    ),
    service(
        "memswap_limit",
        V::BOTH,
        "Total memory limit (memory + swap).",
    ),
    service(
        "shm_size",
        V::BOTH,
        "Size of /dev/shm, as a byte value with an optional unit.",
    ),
    service(
        "volume_driver",
        V::BOTH,
        "Volume driver used for all volumes of this service unless a volume names its own.",
    ),
    service(
        "volumes_from",
        V::BOTH,
        "Mount all of the volumes from another service or container, optionally with read-only (`:ro`) or read-write (`:rw`) access.",
    ),
    service(
        "dockerfile",
        V::V1,
        "Alternate Dockerfile. Compose will use an alternate file to build with. A build path must also be specified.",
    ),
    service(
        "net",
        V::V1,
        "Networking mode. Use the same values as the docker client `--net` parameter.",
    ),
    service(
        "log_driver",
        V::V1,
        "Specify a logging driver for the service's containers, as with the `--log-driver` option for docker run.",
    ),
    service(
        "log_opt",
        V::V1,
        "Specify logging options for the logging driver as a mapping.",
    ),
];

pub(super) const NESTED: &[PathKey] = &[
    path(
        "services.*.build.context",
        V::V2,
        "Either a path to a directory containing a Dockerfile, or a url to a git repository. A relative path is interpreted relative to the location of the Compose file.",
    ),
    path(
        "services.*.build.dockerfile",
        V::V2,
        "Alternate Dockerfile, relative to the build context.",
    ),
    path(
        "services.*.build.args",
        V::V2,
        "Build arguments: environment variables accessible only during the build process.",
    ),
    path(
        "services.*.build.target",
        V::V2,
        "Build the specified stage as defined inside the Dockerfile.",
    ),
    path(
        "services.*.build.cache_from",
        V::V2,
        "Images the engine uses for cache resolution.",
    ),
    path(
        "services.*.build.labels",
        V::V2,
        "Metadata added to the resulting image using Docker labels.",
    ),
    path(
        "services.*.logging.driver",
        V::V2,
        "Logging driver for the service's containers, as with the `--log-driver` option for docker run.",
    ),
    path(
        "services.*.logging.options",
        V::V2,
        "Options passed to the logging driver, as key-value pairs.",
    ),
    path(
        "services.*.networks.*.aliases",
        V::V2,
        "Alternative hostnames for this service on the network.",
    ),
    path(
        "services.*.networks.*.ipv4_address",
        V::V2,
        "Static IPv4 address for the container when joining the network.",
    ),
    path(
        "services.*.networks.*.ipv6_address",
        V::V2,
        "Static IPv6 address for the container when joining the network.",
    ),
    path(
        "services.*.depends_on.*.condition",
        V::V2,
        "Condition to wait for before starting: `service_started` or `service_healthy`.",
    ),
    path(
        "services.*.healthcheck.test",
        V::V2,
        "Command run to check health. Either a string or a list starting with `NONE`, `CMD` or `CMD-SHELL`.",
    ),
    path(
        "services.*.healthcheck.interval",
        V::V2,
        "Time between health checks, as a duration.",
    ),
    path(
        "services.*.healthcheck.timeout",
        V::V2,
        "Time after which a single health check is considered failed.",
    ),
    path(
        "services.*.healthcheck.retries",
        V::V2,
        "Consecutive failures needed to consider the container unhealthy.",
    ),
    path(
        "services.*.healthcheck.disable",
        V::V2,
        "Disable any default healthcheck set by the image.",
    ),
    path(
        "services.*.extends.service",
        V::V2,
        "Name of the service being extended.",
    ),
    path(
        "services.*.extends.file",
        V::V2,
        "File containing the service being extended. Defaults to the current file.",
    ),
    path(
        "*.extends.service",
        V::V1,
        "Name of the service being extended.",
    ),
    path(
        "*.extends.file",
        V::V1,
        "File containing the service being extended. Defaults to the current file.",
    ),
    path(
        "*.log_opt.syslog-address",
        V::V1,
        "Address of the syslog server when using the syslog logging driver.",
    ),
    path(
        "networks.*.driver",
        V::V2,
        "Driver used for this network. Defaults to `bridge` on a single host.",
    ),
    path(
        "networks.*.driver_opts",
        V::V2,
        "Options passed to the network driver, as key-value pairs.",
    ),
    path(
        "networks.*.external",
        V::V2,
        "The network was created outside of Compose and is only referenced here.",
    ),
    path(
        "networks.*.internal",
        V::V2,
        "Create an externally isolated network.",
    ),
    path(
        "networks.*.ipam",
        V::V2,
        "Custom IP address management configuration.",
    ),
    path(
        "networks.*.ipam.driver",
        V::V2,
        "Custom IPAM driver, instead of the default.",
    ),
    path(
        "networks.*.ipam.config",
        V::V2,
        "List of configuration blocks, each with an optional `subnet`, `ip_range` and `gateway`.",
    ),
    path(
        "volumes.*.driver",
        V::V2,
        "Volume driver used for this volume. Defaults to `local`.",
    ),
    path(
        "volumes.*.driver_opts",
        V::V2,
        "Options passed to the volume driver, as key-value pairs.",
    ),
    path(
        "volumes.*.external",
        V::V2,
        "The volume was created outside of Compose and is only referenced here.",
    ),
    path(
        "volumes.*.labels",
        V::V2,
        "Metadata added to the volume using Docker labels.",
    ),
];
