//! Deploy: opções de implantação, ambientes e pipeline.

use roteiro_api::ViewNode;

pub fn page() -> ViewNode {
    ViewNode::group(vec![
        ViewNode::heading(1, "Deploy"),
        ViewNode::muted(
            "Da conteinerização ao cluster: como o sistema chega aos ambientes de execução.",
        ),
        options(),
        environments(),
        pipeline(),
        health(),
    ])
}

fn option(title: &str, description: &str, features: [&str; 4], files: [&str; 4]) -> ViewNode {
    ViewNode::card(title)
        .description(description)
        .child(ViewNode::bullets(features))
        .child(ViewNode::heading(4, "Arquivos"))
        .child(ViewNode::bullets(files))
}

fn options() -> ViewNode {
    ViewNode::section("Opções de Deploy").child(ViewNode::columns(vec![
        option(
            "Docker Containers",
            "Cada serviço possui seu próprio Dockerfile para conteinerização",
            [
                "Multi-stage builds para otimização",
                "Imagens baseadas em Alpine Linux",
                "Health checks configurados",
                "Non-root user para segurança",
            ],
            [
                "Dockerfile por serviço",
                "docker-compose.yml",
                "docker-compose.override.yml",
                ".dockerignore",
            ],
        ),
        option(
            "Kubernetes",
            "Manifestos YAML prontos para orquestração em clusters",
            [
                "Deployments com rolling updates",
                "Services para descoberta",
                "ConfigMaps e Secrets",
                "Horizontal Pod Autoscaler",
            ],
            ["deployment.yaml", "service.yaml", "configmap.yaml", "ingress.yaml"],
        ),
        option(
            "Helm Charts",
            "Templates parametrizáveis para deploy automatizado",
            [
                "Templates reutilizáveis",
                "Valores por ambiente",
                "Hooks de lifecycle",
                "Rollback automático",
            ],
            ["Chart.yaml", "values.yaml", "templates/", "charts/"],
        ),
    ]))
}

fn environments() -> ViewNode {
    ViewNode::section("Configuração por Ambiente").child(ViewNode::columns(vec![
        ViewNode::card("Development")
            .description("application-dev.yml")
            .child(ViewNode::bullets([
                "Logs em nível DEBUG",
                "H2 database em memória",
                "Hot reload habilitado",
                "Swagger UI ativo",
            ])),
        ViewNode::card("Staging")
            .description("application-stg.yml")
            .child(ViewNode::bullets([
                "Réplica do ambiente produtivo",
                "Dados mascarados",
                "Testes de aceitação automatizados",
                "Observabilidade completa",
            ])),
        ViewNode::card("Production")
            .description("application-prod.yml")
            .child(ViewNode::bullets([
                "Logs em nível INFO",
                "Conexões com réplicas de leitura",
                "Autoscaling habilitado",
                "Alertas e on-call",
            ])),
    ]))
}

fn pipeline() -> ViewNode {
    ViewNode::section("Pipeline CI/CD")
        .child(ViewNode::text(
            "O GitHub Actions constrói, testa e publica cada serviço de forma independente; \
             o deploy em cluster é feito por Helm com rollback automático em falha de \
             health check.",
        ))
        .child(ViewNode::code(
            "yaml",
            "jobs:\n\
             \x20 build:\n\
             \x20   steps:\n\
             \x20     - uses: actions/checkout@v4\n\
             \x20     - run: ./mvnw verify\n\
             \x20     - run: docker build -t pagamento/pix-service .\n\
             \x20     - run: helm upgrade --install pix-service charts/pix-service",
        ))
}

fn health() -> ViewNode {
    ViewNode::section("Monitoramento e Health Checks")
        .child(ViewNode::card("Endpoints de Saúde").child(ViewNode::bullets([
            "/actuator/health — liveness e readiness",
            "/actuator/info — versão e metadados do build",
            "/actuator/metrics — métricas para o Prometheus",
        ])))
        .child(ViewNode::card("Estratégias de Deploy").child(ViewNode::bullets([
            "Rolling update como padrão",
            "Blue/green para mudanças de schema",
            "Canary para serviços críticos de pagamento",
        ])))
}
